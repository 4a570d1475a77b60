use serde::Serialize;

use super::record::CategorizationRecord;

/// 分類履歴（追記のみ、挿入順 = 表示順）
///
/// プロセス終了とともに破棄される。永続化はしない。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<CategorizationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録を末尾に追加し、追加した記録を返す
    pub fn push(&mut self, record: CategorizationRecord) -> &CategorizationRecord {
        self.records.push(record);
        let index = self.records.len() - 1;
        &self.records[index]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 最新の記録
    pub fn latest(&self) -> Option<&CategorizationRecord> {
        self.records.last()
    }

    /// 全記録（古い順）
    pub fn records(&self) -> &[CategorizationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategorizationRecord> {
        self.records.iter()
    }

    /// 直近 `limit` 件（古い順）。0は全件
    pub fn recent(&self, limit: usize) -> &[CategorizationRecord] {
        if limit == 0 || limit >= self.records.len() {
            return &self.records;
        }
        &self.records[self.records.len() - limit..]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a CategorizationRecord;
    type IntoIter = std::slice::Iter<'a, CategorizationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
