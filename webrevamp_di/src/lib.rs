extern crate self as webrevamp_di;

pub use typemap::TypeMap;
pub use webrevamp_di_derive::Build;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Cache of every value this provider has built so far.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    provider! {
        TestProvider {
            counter: Arc<AtomicUsize>,
        }
    }

    #[derive(Debug, Clone)]
    struct Counted(usize);

    impl Build<TestProvider> for Counted {
        fn build(provider: &mut TestProvider) -> Self {
            if let Some(cached) = provider.cache().get::<Self>() {
                return cached.clone();
            }
            let value = Self(provider.counter.fetch_add(1, Ordering::Relaxed));
            provider.cache().insert(value.clone());
            value
        }
    }

    #[derive(Debug, Clone, Build)]
    struct Service {
        a: Counted,
        b: Counted,
        counter: Arc<AtomicUsize>,
    }

    #[test]
    fn build_caches_dependencies() {
        // Arrange
        let mut provider = TestProvider {
            _cache: Default::default(),
            counter: Default::default(),
        };

        // Act
        let service: Service = provider.provide();

        // Assert
        assert_eq!(service.a.0, 0);
        assert_eq!(service.b.0, 0);
        assert_eq!(service.counter.load(Ordering::Relaxed), 1);
    }
}
