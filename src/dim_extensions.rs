use ndarray::{Dim, Dimension, IntoDimension, Ix, IxDyn};

pub trait DimExtension: Dimension {
    /// Build the dimension from a runtime shape.
    /// Returns `None` when the number of axes does not fit the dimension type.
    fn try_new(ix: &[Ix]) -> Option<Self>;
}

macro_rules! impl_dim_extension {
    ($dim:ty) => {
        impl DimExtension for Dim<$dim> {
            #[inline]
            fn try_new(ix: &[Ix]) -> Option<Self> {
                Some(Dim::<$dim>(ix.try_into().ok()?))
            }
        }
    };
}

impl_dim_extension!([Ix; 0]);
impl_dim_extension!([Ix; 1]);
impl_dim_extension!([Ix; 2]);
impl_dim_extension!([Ix; 3]);
impl_dim_extension!([Ix; 4]);
impl_dim_extension!([Ix; 5]);
impl_dim_extension!([Ix; 6]);

impl DimExtension for IxDyn {
    #[inline]
    fn try_new(ix: &[Ix]) -> Option<Self> {
        Some(ix.into_dimension())
    }
}

/// Copy of `dim` where the axes are reordered such that
/// axis `n` of the result is axis `order[n]` of `dim`.
pub(crate) fn permutation<D: Dimension>(ndim: usize, order: &[usize]) -> D {
    let mut perm = D::zeros(ndim);
    perm.slice_mut()
        .iter_mut()
        .zip(order)
        .for_each(|(p, &o)| *p = o);
    perm
}
