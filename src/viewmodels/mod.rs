pub mod effects;
pub mod session_viewmodel;
pub mod package_viewmodel;

pub use effects::{drop_stale, Effect, RegionContent, Toast, ToastKind};
pub use session_viewmodel::{visible_sections, Section, SessionViewModel};
pub use package_viewmodel::{PackageCard, PackageList, PackageViewModel};
