//! Result types for the BGCR solver and pipeline.

use petcr_numeric::Field;

/// Output of [`bgcr_monthly`](crate::bgcr_monthly).
///
/// Every field has the broadcast shape of `P`, `Epa`, `Erad` and `w`.
#[derive(Debug, Clone)]
pub struct BgcrOutput {
    /// Actual evaporation `E = ratio · Epa`.
    evaporation: Field,
    /// Complementary coefficient `β_c = (Epa/Erad) · x`.
    beta_c: Field,
    /// Root of `x³ − 2x² + z = 0`.
    x: Field,
    /// Budyko evaporation ratio `E/Epa` in `[0, 1]`.
    ratio: Field,
    /// Cells where the arcsine argument was clamped beyond rounding.
    clamped_cells: usize,
    /// Cells set to NaN by the mask policy.
    masked_cells: usize,
}

impl BgcrOutput {
    pub(crate) fn new(
        evaporation: Field,
        beta_c: Field,
        x: Field,
        ratio: Field,
        clamped_cells: usize,
        masked_cells: usize,
    ) -> Self {
        Self {
            evaporation,
            beta_c,
            x,
            ratio,
            clamped_cells,
            masked_cells,
        }
    }

    /// Returns actual evaporation.
    pub fn evaporation(&self) -> &Field {
        &self.evaporation
    }

    /// Returns the complementary coefficient.
    pub fn beta_c(&self) -> &Field {
        &self.beta_c
    }

    /// Returns the cubic root.
    pub fn x(&self) -> &Field {
        &self.x
    }

    /// Returns the clamped Budyko ratio.
    pub fn ratio(&self) -> &Field {
        &self.ratio
    }

    /// Returns the number of cells whose arcsine argument was clamped.
    pub fn clamped_cells(&self) -> usize {
        self.clamped_cells
    }

    /// Returns the number of masked cells.
    pub fn masked_cells(&self) -> usize {
        self.masked_cells
    }

    /// Returns the broadcast output shape.
    pub fn shape(&self) -> &[usize] {
        self.evaporation.shape()
    }
}

/// Output of [`estimate_et`](crate::estimate_et).
#[derive(Debug, Clone)]
pub struct BgcrEstimate {
    et: Field,
    epa: Field,
    erad: Field,
    eaero: Field,
    w: Field,
    beta_c: Field,
    x: Field,
    ratio: Field,
    clamped_cells: usize,
    masked_cells: usize,
}

impl BgcrEstimate {
    pub(crate) fn new(epa: Field, erad: Field, eaero: Field, w: Field, output: BgcrOutput) -> Self {
        Self {
            et: output.evaporation,
            epa,
            erad,
            eaero,
            w,
            beta_c: output.beta_c,
            x: output.x,
            ratio: output.ratio,
            clamped_cells: output.clamped_cells,
            masked_cells: output.masked_cells,
        }
    }

    /// Returns actual evaporation.
    pub fn et(&self) -> &Field {
        &self.et
    }

    /// Returns apparent potential evaporation `Erad + Eaero`.
    pub fn epa(&self) -> &Field {
        &self.epa
    }

    /// Returns the Penman radiation term.
    pub fn erad(&self) -> &Field {
        &self.erad
    }

    /// Returns the Penman aerodynamic term.
    pub fn eaero(&self) -> &Field {
        &self.eaero
    }

    /// Returns the resolved Budyko shape parameter.
    pub fn w(&self) -> &Field {
        &self.w
    }

    /// Returns the complementary coefficient.
    pub fn beta_c(&self) -> &Field {
        &self.beta_c
    }

    /// Returns the cubic root.
    pub fn x(&self) -> &Field {
        &self.x
    }

    /// Returns the Budyko evaporation ratio.
    pub fn ratio(&self) -> &Field {
        &self.ratio
    }

    /// Returns the number of cells whose arcsine argument was clamped.
    pub fn clamped_cells(&self) -> usize {
        self.clamped_cells
    }

    /// Returns the number of cells masked under [`InputPolicy::Mask`](crate::InputPolicy::Mask).
    pub fn masked_cells(&self) -> usize {
        self.masked_cells
    }
}
