use ndarray::{Array2, ArrayView2};

pub struct MatrixHelper;

impl MatrixHelper {
    /// Library matrix product.
    pub fn multiply(lhs: ArrayView2<f32>, rhs: ArrayView2<f32>) -> Array2<f32> {
        lhs.dot(&rhs)
    }

    /// Textbook triple loop, the reference path for timing comparisons.
    pub fn multiply_naive(lhs: ArrayView2<f32>, rhs: ArrayView2<f32>) -> Array2<f32> {
        let (rows, inner) = lhs.dim();
        let cols = rhs.ncols();
        let mut out = Array2::<f32>::zeros((rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = 0.0;
                for k in 0..inner {
                    acc += lhs[[i, k]] * rhs[[k, j]];
                }
                out[[i, j]] = acc;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn naive_product_matches_library() {
        let lhs = array![[1.0_f32, 2.0], [3.0, 4.0]];
        let rhs = array![[0.5_f32, -1.0], [2.0, 0.0]];
        assert_eq!(
            MatrixHelper::multiply(lhs.view(), rhs.view()),
            MatrixHelper::multiply_naive(lhs.view(), rhs.view())
        );
    }
}
