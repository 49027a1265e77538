//! Input normalization ahead of table lookups.

use argic_cli::request::normalize_request;
use argic_core::CodeMapper;
use argic_model::{CodeRequest, GlassSpecification, VehicleDetails};

fn typed(manufacturer: &str, model: &str, color: &str) -> CodeRequest {
    CodeRequest {
        vehicle: VehicleDetails::new(manufacturer, model),
        selected_windows: vec![" jqvmap1_rw ".to_string(), String::new()],
        specification: GlassSpecification::new(color)
            .with_stripe("light green")
            .with_modifications(["heated", "Stop-Light"]),
    }
}

#[test]
fn names_and_tokens_are_canonicalized() {
    let request = normalize_request(typed(" bmw ", "3  series   e46", "blue"));
    assert_eq!(request.vehicle.manufacturer, "BMW");
    assert_eq!(request.vehicle.model, "3 SERIES E46");
    assert_eq!(request.specification.color, "BLUE");
    assert_eq!(request.specification.stripe.as_deref(), Some("LIGHT_GREEN"));
    assert_eq!(
        request.specification.modifications,
        vec!["HEATED".to_string(), "STOP_LIGHT".to_string()]
    );
}

#[test]
fn window_ids_are_trimmed_not_recased() {
    let request = normalize_request(typed("BMW", "3 SERIES E46", "BLUE"));
    assert_eq!(request.selected_windows, vec!["jqvmap1_rw".to_string()]);
}

#[test]
fn blank_stripe_is_dropped() {
    let mut request = typed("BMW", "3 SERIES E46", "BLUE");
    request.specification.stripe = Some("  ".to_string());
    assert_eq!(normalize_request(request).specification.stripe, None);
}

#[test]
fn normalized_input_generates_a_code() {
    let mapper = CodeMapper::shipped();
    let request = normalize_request(typed("land rover", "freelander  ii", "light green"));
    let breakdown = mapper.describe(&request).unwrap();
    insta::assert_json_snapshot!(&breakdown.segments[2..], @r#"
    [
      {
        "kind": "glass_position",
        "name": "REAR_WINDOW",
        "code": "B"
      },
      {
        "kind": "color",
        "name": "LIGHT_GREEN",
        "code": "LG"
      }
    ]
    "#);
    assert_eq!(breakdown.stripe, "LG");
    assert_eq!(breakdown.modifications, "3AB");
}
