pub mod http;
pub mod json_snapshot;
pub mod traits;
pub mod url_source;
pub mod xml_source;

pub use http::{HttpClient, HttpFetch, HttpResponse};
pub use json_snapshot::JsonSnapshotSource;
pub use traits::FeedSource;
pub use url_source::UrlSource;
pub use xml_source::XmlSource;
