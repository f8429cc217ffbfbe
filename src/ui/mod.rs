/// User interface module
///
/// - `surface.rs` - retained display, sidebar and admin surfaces
/// - `renderer.rs` - writes cat records into the surfaces
/// - `widgets.rs` - projects the surfaces into iced widgets

pub mod renderer;
pub mod surface;
pub mod widgets;
