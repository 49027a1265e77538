use argic_model::{CodeRequest, GlassSpecification, VehicleDetails, canonical_name, canonical_token};

/// Bring free-typed input to the canonical key form used by the tables.
///
/// Manufacturer and model names are upper-cased with single spaces; color,
/// stripe and modification names become upper-case tokens. Window ids are
/// diagram widget ids and are only trimmed.
pub fn normalize_request(request: CodeRequest) -> CodeRequest {
    let CodeRequest {
        vehicle,
        selected_windows,
        specification,
    } = request;
    CodeRequest {
        vehicle: VehicleDetails::new(
            canonical_name(&vehicle.manufacturer),
            canonical_name(&vehicle.model),
        ),
        selected_windows: selected_windows
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect(),
        specification: GlassSpecification {
            color: canonical_token(&specification.color),
            stripe: specification
                .stripe
                .as_deref()
                .map(canonical_token)
                .filter(|stripe| !stripe.is_empty()),
            modifications: specification
                .modifications
                .iter()
                .map(String::as_str)
                .map(canonical_token)
                .collect(),
        },
    }
}
