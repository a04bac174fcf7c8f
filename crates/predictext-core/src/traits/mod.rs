mod transport;
mod view;

pub use transport::IPredictionTransport;
pub use view::IPanelView;
