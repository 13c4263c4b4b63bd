/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16
 * @Description  : 更新策略模块单元测试
 *
 * 测试按功能分组：
 * - delta_bar_delta: 逐步演算的具体场景、超参数读写与配置
 * - properties: 随机梯度下的逐元素性质（步长下限、增长/衰减/不变规则、指数平均、参数更新）
 * - trait_tests: UpdatePolicy/PolicyState trait 通用行为、重置、形状检查、多线程独立运行
 */

use crate::utils::traits::float::Element;
use num_traits::ToPrimitive;


/// 把f64字面量转为元素类型
fn elem<A: Element>(value: f64) -> A {
    A::from_hyper(value)
}

/// 把元素转为f64，便于统一比较
fn to_f64<A: Element>(value: A) -> f64 {
    value.to_f64().unwrap()
}

/// 不同元素类型的比较容差
fn tolerance<A: Element>() -> f64 {
    if std::mem::size_of::<A>() == 4 { 1e-5 } else { 1e-12 }
}
