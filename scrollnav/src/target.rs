use crate::state::NavState;

/// Something whose vertical position follows the watcher.
///
/// `top` is the CSS value already rendered for `state`, so DOM targets can
/// write it straight into `style.top` while reactive targets can keep `state`.
pub trait NavTarget {
    fn apply(&mut self, state: NavState, top: &str);
}

/// A missing navigation element turns every update into a no-op.
impl<T: NavTarget> NavTarget for Option<T> {
    fn apply(&mut self, state: NavState, top: &str) {
        if let Some(target) = self {
            target.apply(state, top);
        }
    }
}

impl<T: NavTarget + ?Sized> NavTarget for &mut T {
    fn apply(&mut self, state: NavState, top: &str) {
        (**self).apply(state, top);
    }
}

impl<T: NavTarget + ?Sized> NavTarget for Box<T> {
    fn apply(&mut self, state: NavState, top: &str) {
        (**self).apply(state, top);
    }
}
