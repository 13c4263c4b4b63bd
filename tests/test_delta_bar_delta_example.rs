/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16
 * @Description  : Delta-Bar-Delta 在经典测试函数上的收敛示例
 *
 * 外部驱动循环只在测试中以最简形式实现：求目标值 -> 判断收敛 -> 求梯度 -> 更新一次。
 */

use approx::assert_abs_diff_eq;
use delta_bar_delta::optimizer::{DeltaBarDeltaUpdate, PolicyState, UpdatePolicy};
use delta_bar_delta::utils::traits::float::Element;
use ndarray::{Array2, array};
use num_traits::ToPrimitive;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn elem<A: Element>(value: f64) -> A {
    A::from_hyper(value)
}

fn to_f64<A: Element>(value: A) -> f64 {
    value.to_f64().unwrap()
}

/// 可微的目标函数
trait TestFunction<A: Element> {
    fn evaluate(&self, x: &Array2<A>) -> A;
    fn gradient(&self, x: &Array2<A>) -> Array2<A>;
}

/// 可分离的加权二次函数：f(x) = Σ wᵢ(xᵢ - cᵢ)²，极小值点为c
struct WeightedQuadratic<A: Element> {
    center: Array2<A>,
    weights: Array2<A>,
}

impl<A: Element> WeightedQuadratic<A> {
    fn new() -> Self {
        Self {
            center: array![[1.0], [-2.0], [0.5]].mapv(elem),
            weights: array![[1.0], [2.0], [3.0]].mapv(elem),
        }
    }
}

impl<A: Element> TestFunction<A> for WeightedQuadratic<A> {
    fn evaluate(&self, x: &Array2<A>) -> A {
        let diff = x - &self.center;
        (&self.weights * &diff * &diff).sum()
    }

    fn gradient(&self, x: &Array2<A>) -> Array2<A> {
        (x - &self.center) * &self.weights * elem::<A>(2.0)
    }
}

/// Rosenbrock 函数：f(a, b) = (1 - a)² + 100(b - a²)²，极小值点为(1, 1)
struct Rosenbrock;

impl<A: Element> TestFunction<A> for Rosenbrock {
    fn evaluate(&self, x: &Array2<A>) -> A {
        let (a, b) = (x[[0, 0]], x[[0, 1]]);
        let one = A::one();
        let hundred = elem::<A>(100.0);
        (one - a).powi(2) + hundred * (b - a * a).powi(2)
    }

    fn gradient(&self, x: &Array2<A>) -> Array2<A> {
        let (a, b) = (x[[0, 0]], x[[0, 1]]);
        let one = A::one();
        let da = elem::<A>(-2.0) * (one - a) - elem::<A>(400.0) * a * (b - a * a);
        let db = elem::<A>(200.0) * (b - a * a);
        array![[da, db]]
    }
}

/// 最简的梯度下降驱动；`tolerance`为目标值变化的收敛阈值，返回实际迭代次数
fn optimize<A: Element, P: UpdatePolicy>(
    policy: &P,
    function: &impl TestFunction<A>,
    iterate: &mut Array2<A>,
    max_iterations: usize,
    tolerance: f64,
) -> usize {
    let (rows, cols) = iterate.dim();
    let mut state = policy.instantiate::<A>(rows, cols);
    let mut last_objective = f64::INFINITY;
    for iteration in 0..max_iterations {
        let objective = to_f64(function.evaluate(iterate));
        if (last_objective - objective).abs() < tolerance {
            return iteration;
        }
        last_objective = objective;
        let gradient = function.gradient(iterate);
        state.update(iterate, 0.01, &gradient);
    }
    max_iterations
}

fn weighted_quadratic_converges<A: Element>(tolerance: f64, coordinate_tolerance: f64) {
    init_logger();
    let policy = DeltaBarDeltaUpdate::new(0.01, 0.001, 0.2, 0.8);
    policy.validate().unwrap();
    let function = WeightedQuadratic::<A>::new();
    let mut iterate = array![[5.0], [5.0], [-5.0]].mapv(elem::<A>);

    let iterations = optimize(&policy, &function, &mut iterate, 2000, tolerance);
    println!("加权二次函数：{iterations}次迭代后收敛到{iterate:?}");

    assert!(iterations < 2000, "未在迭代上限内收敛");
    assert_abs_diff_eq!(to_f64(function.evaluate(&iterate)), 0.0, epsilon = 1e-6);
    for (actual, expected) in iterate.iter().zip([1.0, -2.0, 0.5]) {
        assert_abs_diff_eq!(to_f64(*actual), expected, epsilon = coordinate_tolerance);
    }
}

fn rosenbrock_converges<A: Element>() {
    init_logger();
    let policy = DeltaBarDeltaUpdate::new(0.001, 0.0001, 0.2, 0.8);
    let mut iterate = array![[-1.2, 1.0]].mapv(elem::<A>);

    // 不设收敛阈值，固定跑满迭代次数
    let iterations = optimize(&policy, &Rosenbrock, &mut iterate, 10_000, -1.0);
    assert_eq!(iterations, 10_000);

    println!("Rosenbrock：收敛到{iterate:?}");
    assert_abs_diff_eq!(to_f64(Rosenbrock.evaluate(&iterate)), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(to_f64(iterate[[0, 0]]), 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(to_f64(iterate[[0, 1]]), 1.0, epsilon = 1e-3);
}

macro_rules! typed_tests {
    ($($ty:ident => $tolerance:expr, $coordinate_tolerance:expr);*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_delta_bar_delta_weighted_quadratic_ $ty>]() {
                    weighted_quadratic_converges::<$ty>($tolerance, $coordinate_tolerance);
                }

                #[test]
                fn [<test_delta_bar_delta_rosenbrock_ $ty>]() {
                    rosenbrock_converges::<$ty>();
                }
            }
        )*
    };
}

typed_tests!(f32 => 1e-9, 1e-3; f64 => 1e-12, 1e-5);

#[test]
fn test_delta_bar_delta_outperforms_fixed_step_on_quadratic() {
    init_logger();
    // 同样的初始步长，固定步长（kappa=0, phi=0）的梯度下降收敛更慢
    let adaptive = DeltaBarDeltaUpdate::new(0.01, 0.001, 0.2, 0.8);
    let fixed = DeltaBarDeltaUpdate::new(0.01, 0.0, 0.0, 0.8);
    let function = WeightedQuadratic::<f64>::new();

    let mut iterate_adaptive = array![[5.0], [5.0], [-5.0]];
    let mut iterate_fixed = iterate_adaptive.clone();
    let adaptive_iterations = optimize(&adaptive, &function, &mut iterate_adaptive, 5000, 1e-12);
    let fixed_iterations = optimize(&fixed, &function, &mut iterate_fixed, 5000, 1e-12);

    assert!(
        adaptive_iterations < fixed_iterations,
        "自适应：{adaptive_iterations}次，固定步长：{fixed_iterations}次"
    );
}
