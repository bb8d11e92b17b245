//! `linkparam classify <url>` – show which parameter set a link would get.

use linkparam_core::classify;

pub fn run_classify(url: &str) {
    println!("{}", classify(url).as_str());
}
