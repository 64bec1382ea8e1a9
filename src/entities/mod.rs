pub mod betting_tickets;
pub mod odds_items;
pub mod players;
pub mod race_entries;
pub mod races;
pub mod selection_key;
pub mod users;

pub use betting_tickets as betting_ticket_entity;
pub use odds_items as odds_item_entity;
pub use players as player_entity;
pub use race_entries as race_entry_entity;
pub use races as race_entity;
pub use selection_key::SelectionKey;
pub use users as user_entity;
