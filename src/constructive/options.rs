use arrow_array::types::{Float64Type, Int32Type};
use log::trace;

use crate::algorithm::broadcasting::{
    BroadcastableBool, BroadcastableGeometry, BroadcastablePrimitive,
};
use crate::algorithm::kernel::BufferParams;
use crate::constructive::style::{BufferCapStyle, BufferJoinStyle, BufferStyle, StyleParam};
use crate::error::{ConstructiveError, Result};

/// Style parameters of [`buffer`][crate::buffer], in the forms callers supply them.
///
/// Every field is scalar-only: giving an array for any of them makes
/// [`resolve`][Self::resolve] fail, whatever the array holds. They are kept broadcastable here
/// so that the failure is reported by name instead of being impossible to express.
///
/// ```
/// use geoarrow_constructive::{BufferJoinStyle, BufferOptions};
///
/// let options = BufferOptions::default()
///     .with_cap_style("flat")
///     .with_join_style(BufferJoinStyle::Mitre)
///     .with_mitre_limit(2.0);
/// let params = options.resolve().unwrap();
/// assert_eq!(params.cap_style, 2);
/// assert_eq!(params.join_style, 2);
/// ```
#[derive(Debug, Clone)]
pub struct BufferOptions {
    quadsegs: BroadcastablePrimitive<Int32Type>,
    cap_style: StyleParam<BufferCapStyle>,
    join_style: StyleParam<BufferJoinStyle>,
    mitre_limit: BroadcastablePrimitive<Float64Type>,
    single_sided: BroadcastableBool,
}

impl Default for BufferOptions {
    fn default() -> Self {
        BufferParams::default().into()
    }
}

impl BufferOptions {
    /// Number of segments used to approximate a quarter circle.
    pub fn with_quadsegs(mut self, quadsegs: impl Into<BroadcastablePrimitive<Int32Type>>) -> Self {
        self.quadsegs = quadsegs.into();
        self
    }

    pub fn with_cap_style(mut self, cap_style: impl Into<StyleParam<BufferCapStyle>>) -> Self {
        self.cap_style = cap_style.into();
        self
    }

    pub fn with_join_style(mut self, join_style: impl Into<StyleParam<BufferJoinStyle>>) -> Self {
        self.join_style = join_style.into();
        self
    }

    /// Limit on the ratio of a mitre join's length to the buffer radius.
    pub fn with_mitre_limit(
        mut self,
        mitre_limit: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Self {
        self.mitre_limit = mitre_limit.into();
        self
    }

    /// Buffer only one side of linear geometries: the left for positive radii, the right for
    /// negative ones.
    pub fn with_single_sided(mut self, single_sided: impl Into<BroadcastableBool>) -> Self {
        self.single_sided = single_sided.into();
        self
    }

    /// Validate and resolve into the kernel's integer protocol.
    ///
    /// Style names are resolved first, so an unknown name is reported even if another
    /// parameter is also invalid. Scalarity is then checked in declaration order.
    pub fn resolve(&self) -> Result<BufferParams> {
        let cap_style = self.cap_style.resolve_scalar()?;
        let join_style = self.join_style.resolve_scalar()?;

        let params = BufferParams {
            quadsegs: self.quadsegs.as_scalar("quadsegs")?,
            cap_style: cap_style.ok_or(ConstructiveError::ScalarOnly(BufferCapStyle::PARAMETER))?,
            join_style: join_style
                .ok_or(ConstructiveError::ScalarOnly(BufferJoinStyle::PARAMETER))?,
            mitre_limit: self.mitre_limit.as_scalar("mitre_limit")?,
            single_sided: self.single_sided.as_scalar("single_sided")?,
        };
        trace!("resolved buffer parameters: {params:?}");
        Ok(params)
    }
}

impl From<BufferParams> for BufferOptions {
    fn from(params: BufferParams) -> Self {
        Self {
            quadsegs: params.quadsegs.into(),
            cap_style: params.cap_style.into(),
            join_style: params.join_style.into(),
            mitre_limit: params.mitre_limit.into(),
            single_sided: params.single_sided.into(),
        }
    }
}

/// Parameters of [`delaunay_triangles`][crate::delaunay_triangles].
#[derive(Debug, Clone)]
pub struct DelaunayOptions {
    pub(crate) tolerance: BroadcastablePrimitive<Float64Type>,
    pub(crate) only_edges: BroadcastableBool,
}

impl Default for DelaunayOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0.into(),
            only_edges: false.into(),
        }
    }
}

impl DelaunayOptions {
    /// Vertices closer than this are merged before triangulating.
    pub fn with_tolerance(mut self, tolerance: impl Into<BroadcastablePrimitive<Float64Type>>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    /// Return the triangulation's edges as a multi line string instead of its triangles.
    pub fn with_only_edges(mut self, only_edges: impl Into<BroadcastableBool>) -> Self {
        self.only_edges = only_edges.into();
        self
    }
}

/// Parameters of [`voronoi_polygons`][crate::voronoi_polygons].
#[derive(Debug, Clone)]
pub struct VoronoiOptions {
    pub(crate) envelope: BroadcastableGeometry,
    pub(crate) tolerance: BroadcastablePrimitive<Float64Type>,
    pub(crate) only_edges: BroadcastableBool,
}

impl Default for VoronoiOptions {
    fn default() -> Self {
        Self {
            envelope: BroadcastableGeometry::null(),
            tolerance: 0.0.into(),
            only_edges: false.into(),
        }
    }
}

impl VoronoiOptions {
    /// Extend the clipping extent of the diagram to cover this geometry.
    ///
    /// A null envelope (or a null element of an envelope array) means no extra extent.
    pub fn with_envelope(mut self, envelope: impl Into<BroadcastableGeometry>) -> Self {
        self.envelope = envelope.into();
        self
    }

    /// Vertices closer than this are merged before building the diagram.
    pub fn with_tolerance(mut self, tolerance: impl Into<BroadcastablePrimitive<Float64Type>>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    /// Return the diagram's edges as a multi line string instead of its cells.
    pub fn with_only_edges(mut self, only_edges: impl Into<BroadcastableBool>) -> Self {
        self.only_edges = only_edges.into();
        self
    }
}
