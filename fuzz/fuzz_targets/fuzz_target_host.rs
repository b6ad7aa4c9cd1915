#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = deploy_tasks::TargetHost::from_url(content);
        let _ = deploy_tasks::TargetHost::from_ssh_destination(content);
        let _ = content.parse::<deploy_tasks::Phase>();
        let _ = deploy_tasks::config::parse_answer(content);
    }
});
