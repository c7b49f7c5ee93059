//! Accepts the single-dash long flags (`-video_path clip.mp4`) that the
//! experiment scripts pass, by rewriting them to clap's `--video_path` form.

/// Long option names that may be written with a single dash.
pub const LONG_FLAGS: &[&str] = &[
    "video_path",
    "video_speed",
    "fps",
    "playback_speed",
    "save_location",
    "step_limit",
    "probe",
];

pub fn normalize<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter();

    // Program name passes through untouched
    if let Some(program) = iter.next() {
        out.push(program);
    }

    let mut after_terminator = false;
    for arg in iter {
        if after_terminator {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            after_terminator = true;
            out.push(arg);
            continue;
        }
        out.push(rewrite(arg));
    }
    out
}

fn rewrite(arg: String) -> String {
    let Some(rest) = arg.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if LONG_FLAGS.contains(&name) {
        format!("-{}", arg)
    } else {
        arg
    }
}
