//! Settings, defaults reconciliation, and textual descriptions for
//! configurable math objects, along with numeric instances of them and a
//! registry of generated test cases exercising them.

pub mod describing;
pub mod formatting;
pub mod generating;
pub mod merging;
pub mod registry;
pub mod rendering;
pub mod settings;
pub mod templating;

mod regex;
