//! 항로 거리 조회.
//!
//! 실제 해상 항로 계산은 외부 서비스의 몫이며, 여기서는 그 계약을
//! [`RouteDistance`] 트레이트로 정의하고 설정 파일 기반 거리표를 구현체로 제공한다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, BogError, Result};

/// 두 항구 사이 항해 거리[NM]를 제공하는 협력자.
pub trait RouteDistance {
    /// 일치하는 항로가 없으면 [`BogError::RouteNotFound`]를 반환한다.
    fn distance_nm(&self, origin: &str, destination: &str) -> Result<f64>;
}

/// 설정 파일의 `[[routes]]` 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub from: String,
    pub to: String,
    pub distance_nm: f64,
}

/// 항구 쌍별 거리표. 방향과 대소문자를 구분하지 않는다.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    distances: HashMap<(String, String), f64>,
}

fn port_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (port_key(a), port_key(b));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정 항목으로 거리표를 만든다.
    pub fn from_entries(entries: &[RouteEntry]) -> Result<Self> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(&entry.from, &entry.to, entry.distance_nm)?;
        }
        Ok(table)
    }

    /// 항로를 추가한다. 같은 항구 쌍은 덮어쓴다.
    pub fn insert(&mut self, from: &str, to: &str, distance_nm: f64) -> Result<()> {
        ensure_non_negative("항로 거리", distance_nm)?;
        if port_key(from).is_empty() || port_key(to).is_empty() {
            return Err(BogError::invalid("항구 이름이 비어 있습니다."));
        }
        self.distances.insert(pair_key(from, to), distance_nm);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl RouteDistance for RouteTable {
    fn distance_nm(&self, origin: &str, destination: &str) -> Result<f64> {
        if !port_key(origin).is_empty() && port_key(origin) == port_key(destination) {
            return Ok(0.0);
        }
        self.distances
            .get(&pair_key(origin, destination))
            .copied()
            .ok_or_else(|| BogError::RouteNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })
    }
}
