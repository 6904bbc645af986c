use anyhow::Result;
use log::{debug, info};
use neon::rep::{key, Unpacked64};
use neon::ulp;

fn describe(label: &str, x: f64) {
    let u = Unpacked64::of(x);
    println!("{label} = {x:e}");
    println!("  bits   = 0x{:016X}", x.to_bits());
    println!("  key    = {}", key(x));
    println!("  fields = {u}");
    match ulp::of(x) {
        Ok(gap) => println!("  ulp    = {gap:e}"),
        Err(e) => println!("  ulp    = <{e}>"),
    }
}

/// Print ULP facts about two doubles. Pass negative values after `--`.
#[argopt::cmd]
fn main(
    a: f64,
    b: f64,
    #[opt(short, long, default_value = "4")]
    max_ulps: u64,
    #[opt(short, long, default_value = "0")]
    step: i64,
) -> Result<()> {
    env_logger::init();
    debug!("a = {a:e}, b = {b:e}, max_ulps = {max_ulps}, step = {step}");

    describe("a", a);
    describe("b", b);

    match ulp::diff(a, b) {
        Ok(d) => println!("diff   = {d} ulps"),
        Err(e) => println!("diff   = <{e}>"),
    }
    println!("within = {} (max_ulps = {max_ulps})", ulp::within(a, b, max_ulps));

    if step != 0 {
        let moved = ulp::add(a, step);
        info!("stepped {a:e} by {step} ulps");
        println!("a {step:+} ulps = {moved:e}");
    }
    Ok(())
}
