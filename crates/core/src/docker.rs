//! Container image build and containerized pipeline execution
//!
//! Both operations are synchronous and foreground: docker's own output
//! streams to the operator, and a non-zero exit propagates as a fatal
//! error with no retry. Cleanup is left to docker's `--rm` semantics.

use std::process::Command;

use hparse_platform::current_user_ids;

use crate::config::BuildConfig;
use crate::exec;
use crate::Result;

/// Fixed, well-known tag of the builder image.
pub const IMAGE_TAG: &str = "hparse-wasm-builder";

/// Output directory inside the container; bind-mounted onto the host so
/// artifacts land on the host filesystem.
const CONTAINER_OUTPUT_DIR: &str = "/home/builder/hparse/build/wasm";

/// Build the reproducible builder image from the source root.
pub fn build_image(config: &BuildConfig) -> Result<()> {
    exec::run(image_command(config)?)
}

/// Run the full pipeline inside a container of the builder image.
pub fn run_containerized(config: &BuildConfig) -> Result<()> {
    exec::run(container_command(config)?)
}

fn image_command(config: &BuildConfig) -> Result<Command> {
    let platform = config.require_platform()?;

    let mut cmd = Command::new("docker");
    cmd.current_dir(&config.source_root)
        .env("DOCKER_BUILDKIT", "1")
        .arg("build")
        .arg("--platform")
        .arg(platform.to_string())
        .args(["-t", IMAGE_TAG, "."]);
    Ok(cmd)
}

fn container_command(config: &BuildConfig) -> Result<Command> {
    let platform = config.require_platform()?;
    let (uid, gid) = current_user_ids();
    let mount = format!(
        "type=bind,source={},target={}",
        config.output_root.display(),
        CONTAINER_OUTPUT_DIR
    );

    let mut cmd = Command::new("docker");
    cmd.current_dir(&config.source_root)
        .env("DOCKER_BUILDKIT", "1")
        .args(["run", "--rm"])
        .arg("--platform")
        .arg(platform.to_string())
        .arg("--user")
        .arg(format!("{uid}:{gid}"))
        .arg("--mount")
        .arg(mount)
        .args([IMAGE_TAG, "hparse-build"]);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::toolchain_flags;
    use crate::layout::MemoryLayout;
    use hparse_platform::Platform;
    use std::path::PathBuf;

    fn test_config() -> BuildConfig {
        BuildConfig {
            platform: Some(Platform::parse("linux/aarch64").unwrap()),
            source_root: PathBuf::from("/repo"),
            output_root: PathBuf::from("/repo/build/wasm"),
            layout: MemoryLayout::DEFAULT,
            toolchain_flags: toolchain_flags(&MemoryLayout::DEFAULT),
        }
    }

    #[test]
    fn image_command_is_replayable() {
        let cmd = image_command(&test_config()).unwrap();
        assert_eq!(
            exec::render(&cmd),
            "docker build --platform linux/aarch64 -t hparse-wasm-builder ."
        );
        assert_eq!(cmd.get_current_dir(), Some(PathBuf::from("/repo").as_path()));
    }

    #[test]
    fn container_command_mounts_output_and_maps_user() {
        let cmd = container_command(&test_config()).unwrap();
        let line = exec::render(&cmd);
        assert!(line.starts_with("docker run --rm --platform linux/aarch64 --user "));
        assert!(line.contains("--mount type=bind,source=/repo/build/wasm,target=/home/builder/hparse/build/wasm"));
        assert!(line.ends_with("hparse-wasm-builder hparse-build"));
    }

    #[test]
    fn both_commands_enable_buildkit() {
        for cmd in [
            image_command(&test_config()).unwrap(),
            container_command(&test_config()).unwrap(),
        ] {
            let buildkit = cmd.get_envs().any(|(k, v)| {
                k.to_str() == Some("DOCKER_BUILDKIT") && v.and_then(|v| v.to_str()) == Some("1")
            });
            assert!(buildkit);
        }
    }

    #[test]
    fn docker_modes_require_a_platform() {
        let config = BuildConfig {
            platform: None,
            ..test_config()
        };
        assert!(image_command(&config).is_err());
        assert!(container_command(&config).is_err());
    }
}
