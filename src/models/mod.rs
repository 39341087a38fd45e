pub use icon::*;
pub use nav_item::*;
pub use page_meta::*;
pub use route::*;
pub use service_category::*;
pub use showcase::*;

mod icon;
mod nav_item;
mod page_meta;
mod route;
mod service_category;
mod showcase;
