use argic_model::{
    ArgicError, CodeBreakdown, CodeRequest, DEFAULT_GLASS_POSITION, GlassSpecification,
    ProductCode, ResolvedSegment, Result, SegmentKind, SegmentTable, VehicleDetails, WindowEntry,
};
use argic_standards::{TableSet, default_tables};
use tracing::{debug, trace};

/// Code reported for an absent stripe or an empty modification list.
pub const NO_SEGMENT: &str = "N";

/// Resolves attribute names to segment codes and assembles product codes.
///
/// Holds only a shared reference to immutable tables, so one mapper can be
/// used from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct CodeMapper<'a> {
    tables: &'a TableSet,
    default_glass_code: &'a str,
}

impl CodeMapper<'static> {
    /// Mapper over the tables shipped with `argic-standards`.
    ///
    /// # Panics
    ///
    /// Panics if the shipped tables are inconsistent.
    pub fn shipped() -> Self {
        Self::new(default_tables()).expect("shipped tables are consistent")
    }
}

impl Default for CodeMapper<'static> {
    fn default() -> Self {
        Self::shipped()
    }
}

impl<'a> CodeMapper<'a> {
    /// Wrap a table set, checking that windows and the default position
    /// resolve.
    pub fn new(tables: &'a TableSet) -> Result<Self> {
        tables.validate()?;
        let default_glass_code =
            tables
                .glass_positions
                .get(DEFAULT_GLASS_POSITION)
                .ok_or_else(|| ArgicError::MissingDefault {
                    position: DEFAULT_GLASS_POSITION.to_string(),
                })?;
        Ok(Self {
            tables,
            default_glass_code,
        })
    }

    pub fn tables(&self) -> &'a TableSet {
        self.tables
    }

    pub fn resolve_manufacturer(&self, name: &str) -> Result<&'a str> {
        lookup(&self.tables.manufacturers, name)
    }

    pub fn resolve_model(&self, name: &str) -> Result<&'a str> {
        lookup(&self.tables.models, name)
    }

    pub fn resolve_color(&self, name: &str) -> Result<&'a str> {
        lookup(&self.tables.colors, name)
    }

    /// Glass position code for a window selection.
    ///
    /// The first selected id that the window table knows decides, in the
    /// caller's order; with no match the windshield code is returned.
    pub fn resolve_glass_position<S>(&self, selected_window_ids: &[S]) -> &'a str
    where
        S: AsRef<str>,
    {
        self.glass_position(selected_window_ids).1
    }

    /// Matched window entry (if any) and the glass position code.
    fn glass_position<S>(&self, selected: &[S]) -> (Option<&'a WindowEntry>, &'a str)
    where
        S: AsRef<str>,
    {
        match self.tables.windows.first_match(selected) {
            Some(entry) => {
                let code = self
                    .tables
                    .glass_positions
                    .get(&entry.position)
                    .unwrap_or(self.default_glass_code);
                trace!(window = %entry.window, position = %entry.position, code, "glass position");
                (Some(entry), code)
            }
            None => {
                trace!(
                    selected = selected.len(),
                    "no window matched, using default glass position"
                );
                (None, self.default_glass_code)
            }
        }
    }

    /// Stripe code; no stripe yields [`NO_SEGMENT`].
    pub fn resolve_stripe(&self, name: Option<&str>) -> Result<&'a str> {
        match name {
            Some(name) => lookup(&self.tables.stripes, name),
            None => Ok(NO_SEGMENT),
        }
    }

    /// Modification codes, sorted and joined; none yields [`NO_SEGMENT`].
    pub fn resolve_modifications<S>(&self, names: &[S]) -> Result<String>
    where
        S: AsRef<str>,
    {
        let mut codes = names
            .iter()
            .map(|name| lookup(&self.tables.modifications, name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if codes.is_empty() {
            return Ok(NO_SEGMENT.to_string());
        }
        codes.sort_unstable();
        Ok(codes.concat())
    }

    /// Manufacturer, model, glass position and color codes, concatenated.
    ///
    /// The first unknown attribute aborts generation; no partial code is
    /// returned.
    pub fn generate_code<S>(
        &self,
        vehicle: &VehicleDetails,
        selected_windows: &[S],
        specification: &GlassSpecification,
    ) -> Result<ProductCode>
    where
        S: AsRef<str>,
    {
        let manufacturer = self.resolve_manufacturer(&vehicle.manufacturer)?;
        let model = self.resolve_model(&vehicle.model)?;
        let glass = self.resolve_glass_position(selected_windows);
        let color = self.resolve_color(&specification.color)?;
        let code = ProductCode::from_segments(manufacturer, model, glass, color);
        debug!(code = %code, "generated product code");
        Ok(code)
    }

    pub fn generate(&self, request: &CodeRequest) -> Result<ProductCode> {
        self.generate_code(
            &request.vehicle,
            &request.selected_windows,
            &request.specification,
        )
    }

    /// Per-segment breakdown of the code for `request`, including the
    /// stripe and modification codes that are not part of it.
    pub fn describe(&self, request: &CodeRequest) -> Result<CodeBreakdown> {
        let vehicle = &request.vehicle;
        let spec = &request.specification;

        let manufacturer = self.resolve_manufacturer(&vehicle.manufacturer)?;
        let model = self.resolve_model(&vehicle.model)?;
        let (matched_window, glass) = self.glass_position(&request.selected_windows);
        let color = self.resolve_color(&spec.color)?;
        let stripe = self.resolve_stripe(spec.stripe.as_deref())?;
        let modifications = self.resolve_modifications(&spec.modifications)?;

        let position =
            matched_window.map_or(DEFAULT_GLASS_POSITION, |entry| entry.position.as_str());

        Ok(CodeBreakdown {
            code: ProductCode::from_segments(manufacturer, model, glass, color).into_string(),
            segments: vec![
                ResolvedSegment::new(
                    SegmentKind::Manufacturer,
                    vehicle.manufacturer.as_str(),
                    manufacturer,
                ),
                ResolvedSegment::new(SegmentKind::Model, vehicle.model.as_str(), model),
                ResolvedSegment::new(SegmentKind::GlassPosition, position, glass),
                ResolvedSegment::new(SegmentKind::Color, spec.color.as_str(), color),
            ],
            matched_window: matched_window.map(|entry| entry.window.clone()),
            stripe: stripe.to_string(),
            modifications,
        })
    }
}

fn lookup<'t>(table: &'t SegmentTable, name: &str) -> Result<&'t str> {
    let result = table.resolve(name);
    match &result {
        Ok(code) => trace!(table = %table.kind(), name, code, "resolved"),
        Err(_) => debug!(table = %table.kind(), name, "no table entry"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodeMapper<'static>>();
    }

    #[test]
    fn modifications_are_sorted_before_joining() {
        let mapper = CodeMapper::shipped();
        assert_eq!(
            mapper
                .resolve_modifications(&["HEATED", "ANTENNA", "GPS"])
                .unwrap(),
            "1A3AG"
        );
    }

    #[test]
    fn no_stripe_and_no_modifications_yield_n() {
        let mapper = CodeMapper::shipped();
        let none: [&str; 0] = [];
        assert_eq!(mapper.resolve_stripe(None).unwrap(), NO_SEGMENT);
        assert_eq!(mapper.resolve_modifications(&none).unwrap(), NO_SEGMENT);
    }
}
