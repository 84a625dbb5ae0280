use bigdecimal::BigDecimal;
use core::str::FromStr;
use num_bigint::BigInt;
use oom_math::{Config, Consts, Context, Error, RoundingMode};
use parking_lot::Mutex;
use std::sync::Arc;

fn d(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[test]
fn context_defaults() {
    let ctx = Context::new().unwrap();

    assert_eq!(ctx.get_precision(), oom_math::DEFAULT_DP);
    assert_eq!(ctx.get_rounding_mode(), oom_math::DEFAULT_RM);
    assert_eq!(ctx.get_power_radix(), oom_math::DEFAULT_POWER_RADIX);

    assert_eq!(ctx.pi().unwrap(), d("3.1415926535897932384626433832795028841972"));
    assert_eq!(ctx.e().unwrap(), d("2.7182818284590452353602874713526624977572"));
}

#[test]
fn context_operations() {
    let mut ctx = Context::with_config(Config {
        dp: 10,
        rm: RoundingMode::HalfUp,
        power_radix: 16,
    })
    .unwrap();

    assert_eq!(ctx.root(&d("8"), &BigInt::from(3)).unwrap(), d("2"));
    assert_eq!(ctx.root(&d("2"), &BigInt::from(2)).unwrap(), d("1.4142135624"));
    assert_eq!(ctx.powi(&d("2"), &BigInt::from(10)).unwrap(), d("1024"));
    assert_eq!(ctx.powi(&d("2"), &BigInt::from(-3)).unwrap(), d("0.125"));
    assert_eq!(ctx.pow(&d("2"), &d("0.5")).unwrap(), d("1.4142135624"));
    assert_eq!(ctx.log(&d("10"), &d("1000")).unwrap(), d("3"));
    assert_eq!(ctx.ln(&d("2")).unwrap(), d("0.6931471806"));
    assert_eq!(ctx.log2(&d("8")).unwrap(), d("3"));
    assert_eq!(ctx.log10(&d("0.01")).unwrap(), d("-2"));
    assert_eq!(ctx.exp(&d("1")).unwrap(), d("2.7182818285"));
    assert_eq!(ctx.sin(&d("0")).unwrap(), d("0"));
    assert_eq!(ctx.cos(&d("0")).unwrap(), d("1"));
    assert_eq!(ctx.tan(&d("1")).unwrap(), d("1.5574077247"));
    assert_eq!(ctx.asin(&d("1")).unwrap(), d("1.5707963268"));
    assert_eq!(ctx.acos(&d("-1")).unwrap(), d("3.1415926536"));
    assert_eq!(ctx.atan(&d("1")).unwrap(), d("0.7853981634"));

    ctx.precision(2);
    assert_eq!(ctx.round(&d("1.2345")).unwrap(), d("1.23"));
    assert_eq!(ctx.divide(&d("1"), &d("3")).unwrap(), d("0.33"));
    assert_eq!(ctx.multiply(&d("1.25"), &d("1.25")).unwrap(), d("1.56"));

    ctx.rounding_mode(RoundingMode::Unnecessary);
    assert_eq!(ctx.divide(&d("1"), &d("3")).unwrap_err(), Error::RoundingNecessary);
    assert_eq!(ctx.divide(&d("1"), &d("0")).unwrap_err(), Error::DivisionByZero);
    assert_eq!(ctx.root(&d("-4"), &BigInt::from(2)).unwrap_err(), Error::InvalidArgument);
    assert_eq!(ctx.asin(&d("2")).unwrap_err(), Error::InvalidArgument);
}

#[test]
fn power_tests() {
    let ctx = Context::new().unwrap();

    assert!(ctx.power_test_above(&d("1000"), &d("1.0001"), &BigInt::from(100_000)).unwrap());
    assert!(ctx.power_test_below(&d("0.5"), &d("0.9999"), &BigInt::from(100_000)).unwrap());
    assert!(!ctx.power_test_below(&d("1024"), &d("2"), &BigInt::from(10)).unwrap());
}

#[test]
fn shared_cache() {
    let cc = Arc::new(Mutex::new(Consts::new().unwrap()));

    let mut ctx1 = Context::new().unwrap();
    ctx1.constant_cache(cc.clone()).precision(60);
    let mut ctx2 = Context::new().unwrap();
    ctx2.constant_cache(cc.clone()).precision(20);

    let threads: Vec<_> = [ctx1, ctx2]
        .into_iter()
        .map(|ctx| std::thread::spawn(move || ctx.sin(&d("1")).unwrap()))
        .collect();

    let res: Vec<BigDecimal> = threads.into_iter().map(|t| t.join().unwrap()).collect();

    assert_eq!(res[0], d("0.841470984807896506652502321630298999622563060798371065672752"));
    assert_eq!(res[1], d("0.84147098480789650665"));
}

#[cfg(feature = "serde")]
#[test]
fn config_serde() {
    let config = Config {
        dp: 25,
        rm: RoundingMode::HalfEven,
        power_radix: 10,
    };

    let s = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&s).unwrap();

    assert_eq!(back, config);
}
