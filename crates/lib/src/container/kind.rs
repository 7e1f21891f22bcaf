//! Container kinds.
//!
//! Every [`Cover`](crate::Cover) is tagged with a [`Kind`]. Normalization and
//! auto-vivification always build children of the writer's own kind, so a
//! `Cover<View>` only ever contains `Cover<View>` children. This is how a
//! specialized container keeps its extra methods all the way down the tree
//! without the caller naming the concrete type at every level.
//!
//! ```
//! use cover::{Cover, Kind};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Default)]
//! struct View;
//!
//! impl Kind for View {
//!     const NAME: &'static str = "view";
//! }
//!
//! // Extension methods live on the specialized container.
//! trait Escaped {
//!     fn escaped(&self, key: &str) -> String;
//! }
//!
//! impl Escaped for Cover<View> {
//!     fn escaped(&self, key: &str) -> String {
//!         self.get(key).map(|v| v.to_string().replace('<', "&lt;")).unwrap_or_default()
//!     }
//! }
//!
//! let mut page = Cover::<View>::new();
//! page.set("body", serde_json::json!({"title": "<b>hi</b>"}));
//!
//! let body = page.get("body").and_then(|v| v.as_cover()).unwrap();
//! assert_eq!(body.escaped("title"), "&lt;b>hi&lt;/b>");
//! ```

use std::fmt;

/// Marker for a concrete container variant.
pub trait Kind: fmt::Debug + Clone + PartialEq + Default + Send + Sync + 'static {
    /// Name used in diagnostics
    const NAME: &'static str;
}

/// The default, general-purpose container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plain;

impl Kind for Plain {
    const NAME: &'static str = "plain";
}
