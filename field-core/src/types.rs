/// Handle returned by [`crate::surface::FrameHost::request_frame`].
///
/// A field only draws when it is called back with the handle it most
/// recently requested; any other handle is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle returned by [`crate::surface::FrameHost::add_resize_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);
