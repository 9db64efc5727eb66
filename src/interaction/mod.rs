pub mod tooltip;

pub use tooltip::{Fade, Pointer, Tooltip, TooltipContent, TooltipState, HIDDEN_OPACITY};
