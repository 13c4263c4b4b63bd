/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16
 * @Description  : 优化器更新策略模块，实现逐参数自适应步长的梯度下降更新
 */

mod base;
mod delta_bar_delta;

pub use base::{PolicyState, UpdatePolicy};
pub use delta_bar_delta::{DEFAULT_MIN_STEP_SIZE, DeltaBarDeltaState, DeltaBarDeltaUpdate, UpdateStats};

#[cfg(test)]
mod tests;
