pub mod json_api;

pub use json_api::{
    add_event_json, complete_match_json, create_match_json, current_match_json,
    match_history_json, player_statistics_json, reset_match_json, undo_last_event_json,
    AddEventRequest, CreateMatchRequest, StatisticsRequest,
};
