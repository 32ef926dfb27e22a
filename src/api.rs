mod notion;

pub use self::notion::Api as Notion;
