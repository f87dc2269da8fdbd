//! Pure projection from block attribute records to render descriptions.
//!
//! Three layers, all deterministic and side-effect free:
//!
//! - [`style`] derives inline style pairs and custom-property sets from a
//!   record (max width, padding variables, per-role typography);
//! - [`container`] wraps child content in the shared layout element with
//!   background, padding, alignment and responsive-class selection;
//! - [`evaluator`] assembles the per-variant carousel structure into a
//!   [`BlockVdom`] tree the HTML compiler serializes.
//!
//! The same projection backs the editor preview and the static save path,
//! so a record cannot render differently on the two sides.

pub mod container;
pub mod evaluator;
pub mod style;
pub mod utils;
pub mod vdom;

pub use container::{container_inline_styles, responsive_class};
pub use evaluator::Evaluator;
pub use style::{container_styles, derive, fmt_num, style_vars, text_style, DerivedStyles};
pub use utils::{join_classes, scope_class, strip_tags};
pub use vdom::{BlockVdom, VNode};
