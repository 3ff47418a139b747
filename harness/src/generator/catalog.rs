use serde::{Deserialize, Serialize};

/// Kernel family a suite function belongs to; decides how it is timed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Math,
    Matrix,
    Filter,
}

/// One performance test function and the cases it reports.
#[derive(Debug, Clone, Copy)]
pub struct SuiteFunction {
    pub name: &'static str,
    pub family: Family,
    pub variants: &'static [&'static str],
}

impl SuiteFunction {
    const fn new(name: &'static str, family: Family, variants: &'static [&'static str]) -> Self {
        Self {
            name,
            family,
            variants,
        }
    }

    pub fn case_name(&self, variant: usize) -> String {
        format!("{}_{}", self.name, self.variants[variant])
    }
}

const SCALAR_AND_VECTORS: &[&str] = &["float", "vec2", "vec3", "vec4"];
const VECTORS: &[&str] = &["vec2", "vec3", "vec4"];
const MATRICES: &[&str] = &["mat2x2", "mat3x3", "mat4x4"];
const LONG_FILTERS: &[&str] = &["taps8", "taps16", "taps32", "taps64", "taps128", "taps256"];
const SHORT_FILTERS: &[&str] = &["taps8", "taps16", "taps32", "taps64", "taps128"];

/// Functions in the order the demo harness runs them.
pub const SUITE: &[SuiteFunction] = &[
    SuiteFunction::new("abs", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("addc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("add", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("divc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("div", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("dot", Family::Math, VECTORS),
    SuiteFunction::new("len", Family::Math, VECTORS),
    SuiteFunction::new("mlac", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("mla", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("mulc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("mul", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("normalize", Family::Math, VECTORS),
    SuiteFunction::new("rsbc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("setc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("subc", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("sub", Family::Math, SCALAR_AND_VECTORS),
    SuiteFunction::new("addmat", Family::Matrix, MATRICES),
    SuiteFunction::new("detmat", Family::Matrix, MATRICES),
    SuiteFunction::new("identitymat", Family::Matrix, MATRICES),
    SuiteFunction::new("invmat", Family::Matrix, MATRICES),
    SuiteFunction::new("mulmat", Family::Matrix, MATRICES),
    SuiteFunction::new("mulcmatvec", Family::Matrix, MATRICES),
    SuiteFunction::new("submat", Family::Matrix, MATRICES),
    SuiteFunction::new("transmat", Family::Matrix, MATRICES),
    SuiteFunction::new("fir", Family::Filter, LONG_FILTERS),
    SuiteFunction::new("fir_decimate", Family::Filter, SHORT_FILTERS),
    SuiteFunction::new("fir_interpolate", Family::Filter, SHORT_FILTERS),
    SuiteFunction::new("fir_lattice", Family::Filter, SHORT_FILTERS),
    SuiteFunction::new("fir_sparse", Family::Filter, SHORT_FILTERS),
    SuiteFunction::new("iir_lattice", Family::Filter, LONG_FILTERS),
];

#[cfg(test)]
pub fn total_cases() -> usize {
    SUITE.iter().map(|function| function.variants.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchcore::render::DEFAULT_EXPECTED_CASES;

    #[test]
    fn suite_matches_stock_case_count() {
        assert_eq!(SUITE.len(), 30);
        assert_eq!(total_cases(), DEFAULT_EXPECTED_CASES);
    }

    #[test]
    fn case_names_join_function_and_variant() {
        assert_eq!(SUITE[0].case_name(2), "abs_vec3");
        assert_eq!(SUITE[29].case_name(5), "iir_lattice_taps256");
    }
}
