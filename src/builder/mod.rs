mod interleave;
mod qr;
mod symbol;

pub use qr::{build_matrix, Module, QR};
pub use symbol::{build_final_message, create_symbol, encode_data, release_symbol, Symbol};

use tracing::{debug, debug_span};

use crate::common::{
    codec::{
        compute_optimal_segments, encode_segments, find_min_version,
        find_optimal_version_and_segments, Mode, Segment,
    },
    ec::Tables,
    error::{QRError, QRResult},
    mask::MaskPattern,
    metadata::{ECLevel, Version},
};

pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mode: Option<Mode>,
    mask: Option<MaskPattern>,
    eci: Option<u32>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::M, mode: None, mask: None, eci: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Forces the segment mode. Kanji data must already be Shift JIS.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    /// Prefixes the data with an ECI header carrying `designator`.
    pub fn eci(&mut self, designator: u32) -> &mut Self {
        self.eci = Some(designator);
        self
    }

    pub fn metadata(&self) -> String {
        let version = self.version.map_or_else(|| "None".to_string(), |v| v.to_string());
        let mode = self.mode.map_or_else(|| "None".to_string(), |m| format!("{m:?}"));
        let mask = self.mask.map_or_else(|| "None".to_string(), |m| m.to_string());
        format!(
            "{{ Version: {version}, Ec level: {:?}, Mode: {mode}, Mask: {mask} }}",
            self.ec_level
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        self.build_with(Tables::shared())
    }

    pub fn build_with(&self, tables: &Tables) -> QRResult<QR> {
        let span = debug_span!("build", meta = %self.metadata());
        let _guard = span.enter();

        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        let mut segs = Vec::new();
        if let Some(designator) = self.eci {
            segs.push(Segment::eci(designator)?);
        }

        let version = match (self.mode, self.version) {
            (Some(mode), Some(v)) => {
                segs.push(Segment::new(mode, self.data)?);
                v
            }
            (Some(mode), None) => {
                debug!("Finding best version");
                segs.push(Segment::new(mode, self.data)?);
                find_min_version(&segs, self.ec_level)?
            }
            (None, Some(v)) => {
                debug!("Splitting data into optimal segments");
                segs.extend(compute_optimal_segments(self.data, v)?);
                v
            }
            (None, None) => {
                debug!("Finding best version and segments");
                let (v, optimal) =
                    find_optimal_version_and_segments(&segs, self.data, self.ec_level)?;
                segs = optimal;
                v
            }
        };

        debug!(version = *version, segments = segs.len(), "Encoding data");
        let encoded = encode_segments(&segs, version, self.ec_level)?;

        debug!("Constructing payload with ecc & interleaving");
        let payload = interleave::build_final_message(tables, &encoded, version, self.ec_level)?;

        debug!("Constructing QR");
        let qr = build_matrix(version, self.ec_level, self.mask, &payload)?;

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        debug!(
            mask = ?qr.mask(),
            data_capacity = version.data_capacity(self.ec_level),
            dark_modules,
            light_modules = total_modules - dark_modules,
            "QR generated"
        );

        Ok(qr)
    }
}
