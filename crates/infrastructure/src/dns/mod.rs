pub mod lookup_client;
pub mod message_builder;
pub mod response_parser;

pub use lookup_client::UdpLookupClient;
pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
