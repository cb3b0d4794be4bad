//! Container type entry.

use std::fmt;
use std::str::FromStr;

/// Container families with native conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    StringList,
    LinkedList,
    Vector,
    Stack,
    Queue,
    Set,
    Map,
    MultiMap,
    Hash,
    MultiHash,
    Pair,
}

impl ContainerKind {
    /// Configuration spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerKind::List => "list",
            ContainerKind::StringList => "string-list",
            ContainerKind::LinkedList => "linked-list",
            ContainerKind::Vector => "vector",
            ContainerKind::Stack => "stack",
            ContainerKind::Queue => "queue",
            ContainerKind::Set => "set",
            ContainerKind::Map => "map",
            ContainerKind::MultiMap => "multi-map",
            ContainerKind::Hash => "hash",
            ContainerKind::MultiHash => "multi-hash",
            ContainerKind::Pair => "pair",
        }
    }

    /// Number of template arguments the container takes.
    pub fn arity(self) -> usize {
        match self {
            ContainerKind::StringList => 0,
            ContainerKind::Map
            | ContainerKind::MultiMap
            | ContainerKind::Hash
            | ContainerKind::MultiHash
            | ContainerKind::Pair => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "list" => ContainerKind::List,
            "string-list" => ContainerKind::StringList,
            "linked-list" => ContainerKind::LinkedList,
            "vector" => ContainerKind::Vector,
            "stack" => ContainerKind::Stack,
            "queue" => ContainerKind::Queue,
            "set" => ContainerKind::Set,
            "map" => ContainerKind::Map,
            "multi-map" => ContainerKind::MultiMap,
            "hash" => ContainerKind::Hash,
            "multi-hash" => ContainerKind::MultiHash,
            "pair" => ContainerKind::Pair,
            other => return Err(format!("unknown container kind '{other}'")),
        };
        Ok(kind)
    }
}

/// Payload of a container type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerTypeEntry {
    pub container_kind: ContainerKind,
}

impl ContainerTypeEntry {
    pub fn new(container_kind: ContainerKind) -> Self {
        Self { container_kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_kind_parse() {
        assert_eq!("map".parse::<ContainerKind>(), Ok(ContainerKind::Map));
        assert_eq!(
            "multi-hash".parse::<ContainerKind>(),
            Ok(ContainerKind::MultiHash)
        );
        assert!("tree".parse::<ContainerKind>().is_err());
    }

    #[test]
    fn container_kind_spelling_roundtrips() {
        for kind in [ContainerKind::List, ContainerKind::StringList, ContainerKind::Pair] {
            assert_eq!(kind.as_str().parse::<ContainerKind>(), Ok(kind));
        }
    }

    #[test]
    fn container_arity() {
        assert_eq!(ContainerKind::StringList.arity(), 0);
        assert_eq!(ContainerKind::List.arity(), 1);
        assert_eq!(ContainerKind::Map.arity(), 2);
    }
}
