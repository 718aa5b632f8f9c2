//! 本地化适配器

mod static_localizer;

pub use static_localizer::StaticLocalizer;
