use uuid::Uuid;

use crate::BlockId;

/// Identity metadata of a block, bound once at setup.
///
/// - `id`: unique identifier of this block instance.
/// - `kind`: the block type, e.g. `"PutHttp"`.
/// - `description`: one-line summary exposed to the hosting graph for discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMeta {
    id: BlockId,
    kind: &'static str,
    description: &'static str,
}

impl BlockMeta {
    pub fn new(kind: &'static str, description: &'static str) -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            kind,
            description,
        }
    }

    /// Unique identifier for this block instance.
    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl std::fmt::Display for BlockMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{:x}", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_block_gets_own_id() {
        let a = BlockMeta::new("Echo", "echoes");
        let b = BlockMeta::new("Echo", "echoes");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.kind(), "Echo");
        assert_eq!(a.description(), "echoes");
    }

    #[test]
    fn test_display_includes_kind() {
        let meta = BlockMeta::new("Echo", "echoes");
        assert!(meta.to_string().starts_with("Echo#"));
    }
}
