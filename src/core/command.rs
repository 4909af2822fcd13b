//! arduino-cli subcommand table
//!
//! Maps each logical operation name to the subcommand tokens placed on the
//! command line.

use std::fmt;

/// One arduino-cli subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    BoardAttach,
    BoardDetails,
    BoardList,
    BoardListall,
    BurnBootloader,
    CacheClean,
    Compile,
    Completion,
    ConfigDump,
    ConfigInit,
    CoreDownload,
    CoreInstall,
    CoreList,
    CoreSearch,
    CoreUninstall,
    CoreUpdateIndex,
    CoreUpgrade,
    Daemon,
    Debug,
    LibDeps,
    LibDownload,
    LibInstall,
    LibList,
    LibSearch,
    LibUninstall,
    LibUpdateIndex,
    LibUpgrade,
    Outdated,
    SketchNew,
    Update,
    Upgrade,
    Upload,
    Version,
}

impl Subcommand {
    /// Every known subcommand
    pub const ALL: &'static [Subcommand] = &[
        Subcommand::BoardAttach,
        Subcommand::BoardDetails,
        Subcommand::BoardList,
        Subcommand::BoardListall,
        Subcommand::BurnBootloader,
        Subcommand::CacheClean,
        Subcommand::Compile,
        Subcommand::Completion,
        Subcommand::ConfigDump,
        Subcommand::ConfigInit,
        Subcommand::CoreDownload,
        Subcommand::CoreInstall,
        Subcommand::CoreList,
        Subcommand::CoreSearch,
        Subcommand::CoreUninstall,
        Subcommand::CoreUpdateIndex,
        Subcommand::CoreUpgrade,
        Subcommand::Daemon,
        Subcommand::Debug,
        Subcommand::LibDeps,
        Subcommand::LibDownload,
        Subcommand::LibInstall,
        Subcommand::LibList,
        Subcommand::LibSearch,
        Subcommand::LibUninstall,
        Subcommand::LibUpdateIndex,
        Subcommand::LibUpgrade,
        Subcommand::Outdated,
        Subcommand::SketchNew,
        Subcommand::Update,
        Subcommand::Upgrade,
        Subcommand::Upload,
        Subcommand::Version,
    ];

    /// Tokens placed on the command line for this subcommand
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Subcommand::BoardAttach => &["board", "attach"],
            Subcommand::BoardDetails => &["board", "details"],
            Subcommand::BoardList => &["board", "list"],
            Subcommand::BoardListall => &["board", "listall"],
            Subcommand::BurnBootloader => &["burn-bootloader"],
            Subcommand::CacheClean => &["cache", "clean"],
            Subcommand::Compile => &["compile"],
            Subcommand::Completion => &["completion"],
            Subcommand::ConfigDump => &["config", "dump"],
            Subcommand::ConfigInit => &["config", "init"],
            Subcommand::CoreDownload => &["core", "download"],
            Subcommand::CoreInstall => &["core", "install"],
            Subcommand::CoreList => &["core", "list"],
            Subcommand::CoreSearch => &["core", "search"],
            Subcommand::CoreUninstall => &["core", "uninstall"],
            Subcommand::CoreUpdateIndex => &["core", "update-index"],
            Subcommand::CoreUpgrade => &["core", "upgrade"],
            Subcommand::Daemon => &["daemon"],
            Subcommand::Debug => &["debug"],
            Subcommand::LibDeps => &["lib", "deps"],
            Subcommand::LibDownload => &["lib", "download"],
            Subcommand::LibInstall => &["lib", "install"],
            Subcommand::LibList => &["lib", "list"],
            Subcommand::LibSearch => &["lib", "search"],
            Subcommand::LibUninstall => &["lib", "uninstall"],
            Subcommand::LibUpdateIndex => &["lib", "update-index"],
            Subcommand::LibUpgrade => &["lib", "upgrade"],
            Subcommand::Outdated => &["outdated"],
            Subcommand::SketchNew => &["sketch", "new"],
            Subcommand::Update => &["update"],
            Subcommand::Upgrade => &["upgrade"],
            Subcommand::Upload => &["upload"],
            Subcommand::Version => &["version"],
        }
    }

    /// Logical operation name, e.g. `core.install`
    pub fn name(self) -> &'static str {
        match self {
            Subcommand::BoardAttach => "board.attach",
            Subcommand::BoardDetails => "board.details",
            Subcommand::BoardList => "board.list",
            Subcommand::BoardListall => "board.listall",
            Subcommand::BurnBootloader => "burnBootloader",
            Subcommand::CacheClean => "cache.clean",
            Subcommand::Compile => "compile",
            Subcommand::Completion => "completion",
            Subcommand::ConfigDump => "config.dump",
            Subcommand::ConfigInit => "config.init",
            Subcommand::CoreDownload => "core.download",
            Subcommand::CoreInstall => "core.install",
            Subcommand::CoreList => "core.list",
            Subcommand::CoreSearch => "core.search",
            Subcommand::CoreUninstall => "core.uninstall",
            Subcommand::CoreUpdateIndex => "core.update.index",
            Subcommand::CoreUpgrade => "core.upgrade",
            Subcommand::Daemon => "daemon",
            Subcommand::Debug => "debug",
            Subcommand::LibDeps => "lib.deps",
            Subcommand::LibDownload => "lib.download",
            Subcommand::LibInstall => "lib.install",
            Subcommand::LibList => "lib.list",
            Subcommand::LibSearch => "lib.search",
            Subcommand::LibUninstall => "lib.uninstall",
            Subcommand::LibUpdateIndex => "lib.updateIndex",
            Subcommand::LibUpgrade => "lib.upgrade",
            Subcommand::Outdated => "outdated",
            Subcommand::SketchNew => "sketch.new",
            Subcommand::Update => "update",
            Subcommand::Upgrade => "upgrade",
            Subcommand::Upload => "upload",
            Subcommand::Version => "version",
        }
    }

    /// Look up a subcommand by its logical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_tokens_are_unique() {
        let names: HashSet<_> = Subcommand::ALL.iter().map(|s| s.name()).collect();
        let tokens: HashSet<_> = Subcommand::ALL.iter().map(|s| s.tokens()).collect();
        assert_eq!(names.len(), Subcommand::ALL.len());
        assert_eq!(tokens.len(), Subcommand::ALL.len());
    }

    #[test]
    fn test_name_lookup_roundtrips() {
        for sub in Subcommand::ALL {
            assert_eq!(Subcommand::from_name(sub.name()), Some(*sub));
        }
        assert_eq!(Subcommand::from_name("core.teleport"), None);
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(Subcommand::CoreInstall.to_string(), "core install");
        assert_eq!(Subcommand::CoreUpdateIndex.to_string(), "core update-index");
        assert_eq!(Subcommand::ConfigInit.to_string(), "config init");
        assert_eq!(Subcommand::BurnBootloader.to_string(), "burn-bootloader");
    }
}
