pub mod describe;
pub mod hit;

pub use describe::{
    Drawable, MonospaceMeasure, RenderDescriptor, TextMeasure, describe, render_list,
};
pub use hit::{classify, find_topmost};
