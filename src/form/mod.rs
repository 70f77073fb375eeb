mod plain;
mod render;
mod sink;
mod state;

pub use plain::{input_text, label_line, plain_lines};
pub use render::{
    ChoiceOption, Control, ControlGroup, FormView, PLACEHOLDER_MESSAGE, RenderedForm, render,
};
pub use sink::{JsonLinesSink, LogSink, SubmitSink};
pub use state::{FieldError, FormState, REQUIRED_MESSAGE};
