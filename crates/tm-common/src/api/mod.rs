pub mod match_request;
pub mod match_response;

pub use match_request::MatchRequestBody;
pub use match_response::MatchResponse;
