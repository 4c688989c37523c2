//! Menu widgets
//!
//! # Module Structure
//!
//! - `key` - Logical key tokens
//! - `state` - Cursor, pagination and filtered view
//! - `search` - Default and custom option filtering
//! - `render` - Page rendering
//! - `single` / `multi` - Menus that resolve to a value
//! - `composite` - Navigation menus over actions and sub-menus

mod composite;
mod key;
mod multi;
mod outcome;
pub mod render;
pub mod search;
mod single;
mod state;
mod style;

pub use composite::{ActionItem, CompositeMenu, Entry, Show};
pub use key::Key;
pub use multi::{MultiMenu, SelectionSet};
pub use outcome::Outcome;
pub use search::Matcher;
pub use single::SingleMenu;
pub use state::{MenuState, SEARCH_PROMPT};
pub use style::{Marks, MenuStyle, DEFAULT_INDICATOR, DEFAULT_PAGE_SIZE};
