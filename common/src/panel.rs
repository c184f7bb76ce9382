//! 선택/비교 상태 머신
//!
//! 카탈로그 로드 후 초기화되고, 사용자 이벤트(탭 전환/선택/상 전환/비교
//! 토글)로만 변한다. 전이는 전부 동기이며 페이지 수명 밖으로 저장되지
//! 않는다.

use std::collections::HashMap;

use crate::catalog::{Catalog, Category, FanPhase};

/// 비교 모드 상태. previous/current 는 깊이 2 링 버퍼로 동작한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    pub enabled: bool,
    pub previous: Option<String>,
    pub current: Option<String>,
}

impl CompareState {
    /// 비교 패널을 그릴 열이 하나라도 있는지
    pub fn has_columns(&self) -> bool {
        self.previous.is_some() || self.current.is_some()
    }

    fn clear(&mut self) {
        self.previous = None;
        self.current = None;
    }
}

/// 재원 패널 전체의 선택 상태
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState {
    pub active: Category,
    pub fan_phase: FanPhase,
    selections: HashMap<Category, String>,
    pub compare: CompareState,
}

impl SelectorState {
    /// 로드 직후 상태: 카테고리마다 첫 레코드를 기본 선택으로 잡는다.
    /// 빈 컬렉션은 선택 없음으로 남는다.
    pub fn new(catalog: &Catalog) -> Self {
        let fan_phase = FanPhase::default();
        let mut selections = HashMap::new();
        for cat in Category::ALL {
            if let Some(key) = catalog.first_key(cat, fan_phase) {
                selections.insert(cat, key);
            }
        }
        SelectorState {
            active: Category::Motor,
            fan_phase,
            selections,
            compare: CompareState::default(),
        }
    }

    /// 카테고리의 현재 선택 키
    pub fn selection(&self, category: Category) -> Option<&str> {
        self.selections.get(&category).map(String::as_str)
    }

    /// 활성 카테고리의 현재 선택 키
    pub fn active_selection(&self) -> Option<&str> {
        self.selection(self.active)
    }

    /// 탭 전환. 흡입구 진입 시 비교 모드는 강제 해제되고,
    /// 그 외 탭은 current 를 해당 탭의 선택으로 재시드, previous 는 비운다.
    pub fn switch_tab(&mut self, category: Category) {
        self.active = category;
        if category == Category::Inlet {
            self.compare.enabled = false;
            self.compare.clear();
        } else {
            self.compare.previous = None;
            self.compare.current = self.selection(category).map(str::to_string);
        }
    }

    /// 레코드 선택. 활성 탭이 아닌 카테고리의 선택 이벤트는 무시한다.
    /// 비교 모드에서는 previous ← current ← key 로 한 칸 민다.
    pub fn select(&mut self, category: Category, key: impl Into<String>) {
        if category != self.active {
            return;
        }
        let key = key.into();
        self.selections.insert(category, key.clone());
        if self.compare.enabled {
            self.compare.previous = self.compare.current.take();
            self.compare.current = Some(key);
        }
    }

    /// 단상/삼상 전환. 새 목록의 첫 형식으로 기본 선택을 되돌린다.
    /// 비교 상태는 건드리지 않는다.
    pub fn set_fan_phase(&mut self, phase: FanPhase, catalog: &Catalog) {
        self.fan_phase = phase;
        match catalog.first_key(Category::Fan, phase) {
            Some(key) => {
                self.selections.insert(Category::Fan, key);
            }
            None => {
                self.selections.remove(&Category::Fan);
            }
        }
    }

    /// 비교 모드 토글. 켜면 current 를 활성 선택으로 시드하고 previous 는
    /// 비워 둔다(첫 선택 전까지 null). 끄면 둘 다 비운다.
    pub fn toggle_compare(&mut self, enabled: bool) {
        self.compare.enabled = enabled;
        if enabled {
            self.compare.current = self.active_selection().map(str::to_string);
            self.compare.previous = None;
        } else {
            self.compare.clear();
        }
    }
}
