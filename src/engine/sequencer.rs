// ==========================================
// 销售线索轮转分配系统 - 顺位序列引擎
// ==========================================
// 职责: 基准顺序 + 净命中数 → "下一位是谁" 的有序序列
// 规则: 绝对位置 p (1 起), 自然占位人 = base[(p-1) mod L],
//       轮次 k = (p-1) div L; 占位人第 k 轮被跳过当且仅当 k < 净命中数
// 红线: 负命中数只免除跳过, 不允许提前抢占更早的未决位置;
//       展示上限只截断输出, 不影响正确性
// ==========================================

use crate::domain::types::RepId;
use std::collections::HashMap;

// ==========================================
// SequenceIter - 惰性顺位迭代器
// ==========================================
// 可重启: 从同一输入重新构造即从头开始; 非空顺序下永不枯竭
pub struct SequenceIter<'a> {
    order: &'a [RepId],
    net_hits: &'a HashMap<RepId, i64>,
    next_pos: u64,
}

impl<'a> Iterator for SequenceIter<'a> {
    type Item = &'a RepId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.order.is_empty() {
            return None;
        }
        let len = self.order.len() as u64;
        loop {
            let p = self.next_pos;
            self.next_pos += 1;

            let occupant = &self.order[(p % len) as usize];
            let cycle = (p / len) as i64;
            let hits = self.net_hits.get(occupant).copied().unwrap_or(0);

            // 第 cycle 轮被跳过当且仅当 cycle < hits
            // 负命中数恒不跳过 (保守解释: 不提前抢位)
            if cycle >= hits {
                return Some(occupant);
            }
        }
    }
}

// ==========================================
// RotationSequencer - 顺位序列引擎 (无状态)
// ==========================================
pub struct RotationSequencer;

impl RotationSequencer {
    /// 构造惰性顺位迭代器
    ///
    /// # 参数
    /// - order: 候选循环顺序 (基准顺序或资格过滤后的子集)
    /// - net_hits: 净命中数, 缺失的代表按 0
    pub fn iter<'a>(
        order: &'a [RepId],
        net_hits: &'a HashMap<RepId, i64>,
    ) -> SequenceIter<'a> {
        SequenceIter {
            order,
            net_hits,
            next_pos: 0,
        }
    }

    /// 取顺位序列前 count 位 (展示窗口)
    ///
    /// 空候选顺序 → 空序列 (区别于泳道关闭, 由调用方判别)
    pub fn sequence(
        order: &[RepId],
        net_hits: &HashMap<RepId, i64>,
        count: usize,
    ) -> Vec<RepId> {
        Self::iter(order, net_hits).take(count).cloned().collect()
    }

    /// 取顺位第一位
    pub fn next_rep(order: &[RepId], net_hits: &HashMap<RepId, i64>) -> Option<RepId> {
        Self::iter(order, net_hits).next().cloned()
    }
}
