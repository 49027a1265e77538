pub mod code;
pub mod error;
pub mod normalize;
pub mod request;
pub mod segment;
pub mod window;

pub use code::{CodeBreakdown, ProductCode, ResolvedSegment};
pub use error::{ArgicError, Result};
pub use normalize::{canonical_name, canonical_token};
pub use request::{CodeRequest, GlassSpecification, VehicleDetails};
pub use segment::{SegmentEntry, SegmentKind, SegmentTable};
pub use window::{DEFAULT_GLASS_POSITION, WindowEntry, WindowPriorityTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attribute_message_names_the_table() {
        let err = ArgicError::UnknownAttribute {
            kind: SegmentKind::Manufacturer,
            name: "TRABANT".to_string(),
        };
        assert_eq!(err.to_string(), "unknown manufacturer 'TRABANT'");
    }

    #[test]
    fn request_serializes() {
        let request = CodeRequest {
            vehicle: VehicleDetails::new("BMW", "3 SERIES E46"),
            selected_windows: vec!["jqvmap1_ws".to_string()],
            specification: GlassSpecification::new("BLUE"),
        };
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: CodeRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
    }
}
