/// The host's "call me again on the next frame" primitive.
///
/// [`crate::field::Field::frame`] requests the next frame after every draw,
/// so a host only has to invoke it once per callback to keep the animation
/// running.
pub trait FrameScheduler {
    fn request_next_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_next_frame(&mut self) {
        (*self)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_schedulers() {
        let mut requested = 0;
        {
            let mut scheduler = || requested += 1;
            scheduler.request_next_frame();
            scheduler.request_next_frame();
        }
        assert_eq!(requested, 2);
    }
}
