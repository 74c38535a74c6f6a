// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! RAII activation scope for a graphics context.

use std::ops::{Deref, DerefMut};

use portolan_core::graphics::GraphicsContext;

/// Activates a context for the duration of a scope.
///
/// `deactivate` runs on every exit path, including unwinds, so the context
/// is never left current after a failed render pass. Activation is not
/// reentrant: the guard holds the context's `&mut` borrow, so a second
/// activation of the same context cannot be expressed while the scope lives.
pub struct ContextScope<'a, C: GraphicsContext + ?Sized> {
    context: &'a mut C,
}

impl<'a, C: GraphicsContext + ?Sized> ContextScope<'a, C> {
    /// Activates `context` and returns the guard.
    pub fn new(context: &'a mut C) -> Self {
        context.activate();
        Self { context }
    }
}

impl<C: GraphicsContext + ?Sized> Deref for ContextScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: GraphicsContext + ?Sized> DerefMut for ContextScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: GraphicsContext + ?Sized> Drop for ContextScope<'_, C> {
    fn drop(&mut self) {
        self.context.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portolan_core::graphics::ProcAddress;
    use portolan_core::math::Extent2D;

    #[derive(Default)]
    struct CountingContext {
        activations: usize,
        deactivations: usize,
    }

    impl GraphicsContext for CountingContext {
        fn activate(&mut self) {
            self.activations += 1;
        }

        fn deactivate(&mut self) {
            self.deactivations += 1;
        }

        fn resolve_extension(&self, _name: &str) -> ProcAddress {
            std::ptr::null()
        }

        fn current_size(&self) -> Extent2D {
            Extent2D::default()
        }
    }

    #[test]
    fn scope_pairs_activate_with_deactivate() {
        let mut ctx = CountingContext::default();
        {
            let _scope = ContextScope::new(&mut ctx);
        }
        assert_eq!(ctx.activations, 1);
        assert_eq!(ctx.deactivations, 1);
    }

    #[test]
    fn deactivate_runs_on_unwind() {
        let mut ctx = CountingContext::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = ContextScope::new(&mut ctx);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(ctx.deactivations, 1);
    }
}
