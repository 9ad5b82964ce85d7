/// Build-system adapters
mod koji_url_builder;

pub use koji_url_builder::KojiUrlBuilder;
