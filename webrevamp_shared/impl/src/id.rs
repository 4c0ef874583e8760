use std::fmt::Debug;

use uuid::Uuid;
use webrevamp_di::Build;
use webrevamp_shared_contracts::id::IdService;
use webrevamp_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<Uuid> + Debug + Send + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generate() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let ids = (0..1000).map(|_| sut.generate::<Uuid>()).collect::<HashSet<_>>();

        // Assert
        assert_eq!(ids.len(), 1000);
    }
}
