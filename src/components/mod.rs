pub mod navigation;
pub mod templates;

pub use navigation::NavigationComponent;
pub use templates::TemplateComponent;
