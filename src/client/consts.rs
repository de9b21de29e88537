pub const AVS_ACCESS_TOKEN: &str = "AVS_ACCESS_TOKEN";

pub const BASE_URL: &str = "https://access-alexa-na.amazon.com";
pub const RECOGNIZE_PATH: &str = "/v1/avs/speechrecognizer/recognize";
pub const NEXT_ITEM_PATH: &str = "/v1/avs/audioplayer/getNextItem";

pub const REQUEST_CONTENT_TYPE: &str = "application/json; charset=UTF-8";
