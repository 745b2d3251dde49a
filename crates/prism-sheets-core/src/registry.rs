//! Sheet registry
//!
//! Maps human-readable sheet labels to the numeric `gid` of each tab in the
//! published spreadsheet. Lookups match by substring and the first entry in
//! registry order wins.

use crate::error::{Error, Result};

/// One registered sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetEntry {
    /// Label as shown on the spreadsheet tab
    pub label: &'static str,
    /// Numeric sheet id (`gid`)
    pub gid: u64,
}

const fn entry(label: &'static str, gid: u64) -> SheetEntry {
    SheetEntry { label, gid }
}

/// Tabs of the published spreadsheet, in tab order
pub const DEFAULT_SHEETS: &[SheetEntry] = &[
    entry("📺 シナリオ一覧", 788224352),
    entry("🎉 イベント", 195852940),
    entry("ℹ️ このファイルについて", 569209742),
    entry("🌏 translation help", 1795795580),
    entry("ジャンプ(スタァ別)", 607126312),
    entry("🌈 ジャンプ", 397595116),
    entry("🎴 ブロマイド", 1442344221),
    entry("ジャンプコマンド", 1371879367),
    entry("合体ジャンプ", 1223304644),
    entry("🎶 楽曲リスト", 1572242050),
    entry("🎫 Prismチケット入手条件", 451938944),
    entry("ブロマイト(PPガチャ)", 951128679),
    entry("📕 応援グッズ", 1833623005),
    entry("🎁 日替わりプレゼント", 1247915676),
    entry("⛸️ 練習経験値", 2109961420),
    entry("⛸️ 練習コスト", 585549272),
    entry("ファンレベル", 1956343157),
    entry("コレクション", 1441848021),
    entry("🔢 ガチャ確率", 0),
    entry("スチル", 53502103),
    entry("❓ ゲーム内ヘルプ", 1132300940),
    entry("チュートリアル", 1753746412),
    entry("👥 プロフィール", 1890320497),
    entry("お知らせ/一般", 1393334757),
    entry("お知らせ/重要", 1834106149),
];

/// Ordered label → gid mapping
#[derive(Debug, Clone)]
pub struct SheetRegistry {
    entries: Vec<SheetEntry>,
}

impl Default for SheetRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SHEETS.to_vec())
    }
}

impl SheetRegistry {
    /// Create a registry from entries in priority order
    pub fn new(entries: Vec<SheetEntry>) -> Self {
        Self { entries }
    }

    /// Entries in registry order
    pub fn entries(&self) -> &[SheetEntry] {
        &self.entries
    }

    /// Resolve a (partial) sheet name to its entry.
    ///
    /// The first entry whose label contains `name` wins. If several labels
    /// match, the choice is logged since registry order decides it.
    pub fn resolve(&self, name: &str) -> Result<&SheetEntry> {
        let mut matches = self.entries.iter().filter(|e| e.label.contains(name));
        let first = matches
            .next()
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;

        let others: Vec<&str> = matches.map(|e| e.label).collect();
        if !others.is_empty() {
            tracing::warn!(
                "Sheet name '{name}' is ambiguous; using '{}' over {:?}",
                first.label,
                others
            );
        }
        Ok(first)
    }

    /// Resolve a (partial) sheet name to its gid
    pub fn gid(&self, name: &str) -> Result<u64> {
        self.resolve(name).map(|e| e.gid)
    }

    /// Format a URL template, substituting `{gid}` with the resolved sheet id
    pub fn url(&self, template: &str, name: &str) -> Result<String> {
        let gid = self.gid(name)?;
        Ok(template.replace("{gid}", &gid.to_string()))
    }

    /// Check the registry for entries that would make lookups depend on order
    /// in surprising ways: duplicate labels, duplicate ids, or a label that is
    /// contained in another label.
    pub fn validate(&self) -> Result<()> {
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                if a.label == b.label {
                    return Err(Error::DuplicateLabel(a.label.to_string()));
                }
                if a.gid == b.gid {
                    return Err(Error::DuplicateId {
                        id: a.gid,
                        first: a.label.to_string(),
                        second: b.label.to_string(),
                    });
                }
                if b.label.contains(a.label) {
                    return Err(Error::OverlappingLabels {
                        inner: a.label.to_string(),
                        outer: b.label.to_string(),
                    });
                }
                if a.label.contains(b.label) {
                    return Err(Error::OverlappingLabels {
                        inner: b.label.to_string(),
                        outer: a.label.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// One in-sheet hyperlink formula per entry, for pasting into an index tab
    pub fn hyperlink_rows(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("=hyperlink(\"#gid={}\", \"{}\")", e.gid, e.label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_registry_is_valid() {
        SheetRegistry::default().validate().unwrap();
    }

    #[test]
    fn test_resolve_partial_name() {
        let registry = SheetRegistry::default();
        assert_eq!(registry.gid("お知らせ/重要").unwrap(), 1834106149);
        assert_eq!(registry.gid("プロフィール").unwrap(), 1890320497);
        assert_eq!(registry.gid("PPガチャ").unwrap(), 951128679);
        assert_eq!(registry.gid("ガチャ確率").unwrap(), 0);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let registry = SheetRegistry::default();
        // Several labels contain "ジャンプ"; registry order picks the first.
        assert_eq!(registry.resolve("ジャンプ").unwrap().label, "ジャンプ(スタァ別)");
        assert_eq!(registry.gid("お知らせ").unwrap(), 1393334757);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = SheetRegistry::default();
        assert!(matches!(
            registry.resolve("存在しないシート"),
            Err(Error::SheetNotFound(name)) if name == "存在しないシート"
        ));
    }

    #[test]
    fn test_url_template() {
        let registry = SheetRegistry::default();
        let url = registry
            .url("https://example.org/sheet?gid={gid}&single=true", "応援グッズ")
            .unwrap();
        assert_eq!(url, "https://example.org/sheet?gid=1833623005&single=true");
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let registry = SheetRegistry::new(vec![entry("ジャンプ", 1), entry("合体ジャンプ", 2)]);
        assert!(matches!(
            registry.validate(),
            Err(Error::OverlappingLabels { inner, outer }) if inner == "ジャンプ" && outer == "合体ジャンプ"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let registry = SheetRegistry::new(vec![entry("a", 1), entry("a", 2)]);
        assert!(matches!(registry.validate(), Err(Error::DuplicateLabel(_))));

        let registry = SheetRegistry::new(vec![entry("a", 1), entry("b", 1)]);
        assert!(matches!(registry.validate(), Err(Error::DuplicateId { id: 1, .. })));
    }

    #[test]
    fn test_hyperlink_rows() {
        let registry = SheetRegistry::new(vec![entry("スチル", 53502103)]);
        assert_eq!(
            registry.hyperlink_rows(),
            vec!["=hyperlink(\"#gid=53502103\", \"スチル\")".to_string()]
        );
    }

    proptest! {
        /// Any substring of a label resolves to that label's id unless an
        /// earlier entry also contains it.
        #[test]
        fn prop_substring_resolves_to_first_container(
            idx in 0..DEFAULT_SHEETS.len(),
            start in 0usize..16,
            len in 1usize..16,
        ) {
            let registry = SheetRegistry::default();
            let chars: Vec<char> = DEFAULT_SHEETS[idx].label.chars().collect();
            let start = start % chars.len();
            let end = (start + len).min(chars.len());
            let needle: String = chars[start..end].iter().collect();

            let expected = DEFAULT_SHEETS
                .iter()
                .find(|e| e.label.contains(needle.as_str()))
                .map(|e| e.gid);
            prop_assert_eq!(registry.gid(&needle).ok(), expected);
            if !DEFAULT_SHEETS[..idx].iter().any(|e| e.label.contains(needle.as_str())) {
                prop_assert_eq!(registry.gid(&needle).ok(), Some(DEFAULT_SHEETS[idx].gid));
            }
        }

        #[test]
        fn prop_full_label_resolves_exactly(idx in 0..DEFAULT_SHEETS.len()) {
            let registry = SheetRegistry::default();
            prop_assert_eq!(registry.gid(DEFAULT_SHEETS[idx].label).unwrap(), DEFAULT_SHEETS[idx].gid);
        }
    }
}
