//! 内存数据表
//!
//! 行按插入顺序保存；主键总是由表分配，调用方给出的主键会被覆盖。

use tokio::sync::RwLock;

use crate::core::error::StoreError;

/// 可以存入 [`MemoryTable`] 的记录
pub trait Record: Clone + Send + Sync + 'static {
    fn key(&self) -> i32;
    fn assign_key(&mut self, key: i32);
}

#[derive(Debug)]
struct TableState<T> {
    rows: Vec<T>,
    next_key: i32,
}

#[derive(Debug)]
pub struct MemoryTable<T> {
    state: RwLock<TableState<T>>,
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: Vec::new(),
                next_key: 1,
            }),
        }
    }

    pub async fn to_list(&self) -> Vec<T> {
        self.state.read().await.rows.clone()
    }

    pub async fn find(&self, key: i32) -> Option<T> {
        let state = self.state.read().await;
        state.rows.iter().find(|row| row.key() == key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// 分配主键、插入一行并返回保存后的记录
    pub async fn add(&self, mut row: T) -> Result<T, StoreError> {
        let mut state = self.state.write().await;

        let key = state.next_key;
        state.next_key = key
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("key space exhausted".to_string()))?;

        row.assign_key(key);
        state.rows.push(row.clone());
        Ok(row)
    }

    /// 覆盖同主键的行；行已不存在时返回并发错误
    pub async fn update(&self, row: &T) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.rows.iter_mut().find(|existing| existing.key() == row.key()) {
            Some(existing) => {
                *existing = row.clone();
                Ok(())
            }
            None => Err(StoreError::Concurrency { id: row.key() }),
        }
    }

    /// 删除行，返回是否真的删除了
    pub async fn remove(&self, key: i32) -> bool {
        let mut state = self.state.write().await;
        let before = state.rows.len();
        state.rows.retain(|row| row.key() != key);
        state.rows.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: i32,
        label: &'static str,
    }

    impl Record for Row {
        fn key(&self) -> i32 {
            self.key
        }

        fn assign_key(&mut self, key: i32) {
            self.key = key;
        }
    }

    fn row(key: i32, label: &'static str) -> Row {
        Row { key, label }
    }

    #[tokio::test]
    async fn assigns_sequential_keys() {
        let table = MemoryTable::new();
        let first = table.add(row(0, "a")).await.unwrap();
        let second = table.add(row(0, "b")).await.unwrap();
        assert_eq!(first.key, 1);
        assert_eq!(second.key, 2);
    }

    #[tokio::test]
    async fn caller_supplied_keys_are_replaced() {
        let table = MemoryTable::new();
        let first = table.add(row(i32::MAX - 1, "a")).await.unwrap();
        let second = table.add(row(1, "b")).await.unwrap();
        let third = table.add(row(0, "c")).await.unwrap();
        assert_eq!((first.key, second.key, third.key), (1, 2, 3));
        assert_eq!(table.len().await, 3);
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let table = MemoryTable::new();
        table.add(row(0, "five")).await.unwrap();
        table.add(row(0, "two")).await.unwrap();
        let labels: Vec<_> = table.to_list().await.into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["five", "two"]);
    }

    #[tokio::test]
    async fn update_missing_row_is_a_concurrency_error() {
        let table: MemoryTable<Row> = MemoryTable::new();
        let err = table.update(&row(3, "ghost")).await.unwrap_err();
        assert!(matches!(err, StoreError::Concurrency { id: 3 }));
    }

    #[tokio::test]
    async fn update_replaces_row_in_place() {
        let table = MemoryTable::new();
        table.add(row(0, "old")).await.unwrap();
        table.update(&row(1, "new")).await.unwrap();
        assert_eq!(table.find(1).await, Some(row(1, "new")));
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_was_removed() {
        let table = MemoryTable::new();
        table.add(row(0, "a")).await.unwrap();
        assert!(table.remove(1).await);
        assert!(!table.remove(1).await);
        assert!(table.is_empty().await);
    }
}
