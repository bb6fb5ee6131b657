pub mod element;
pub mod event;
pub mod surface;
pub mod text;

pub use element::{find_element, path_to, Content, Direction, Element};
pub use event::{key_event, Event, Key, Modifiers, MouseButton, PointerDown};
pub use surface::{Subscription, Surface};
