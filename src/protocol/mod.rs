pub mod request;
pub mod response;

pub use request::Event;
pub use response::{
    Banner, BannerStyle, Frame, Links, ListView, PanelView, ResultView, SchemaLink, View,
};
