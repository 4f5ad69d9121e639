//! Thread-safe catalogue of named LUTs.

use std::{collections::BTreeMap,
          fs,
          path::Path,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use crate::{
    import::{parse_csv, parse_xml, ImportIssue, ImportReport, PaletteFormat,
             ParsedPalette},
    palettes::{default_entries, ty::{PaletteEntry, PaletteId, PaletteRef}},
    Lut, PaletteError, PaletteResult, RegistryConfig, RGBA8,
};

/// Extensions of the files imported by
/// [`PaletteRegistry::register_from_dir`].
const PALETTE_EXTENSIONS: [&str; 4] = ["pal", "rgb", "csv", "xml"];

lazy_static! {
    static ref GLOBAL: PaletteRegistry = PaletteRegistry::new();
}

struct Inner {
    built: bool,
    entries: BTreeMap<PaletteId, PaletteEntry>,
    next_user_id: PaletteId,
}

/// A catalogue of palettes, addressable by id or by name.
///
/// The built-in palettes are created on first use.  All accesses go
/// through a single mutex; LUTs are handed out as [`Arc`]s so they
/// remain valid whatever is registered afterwards.
///
/// ```
/// use lut_brewery::{Builtin, PaletteRegistry, rgb};
/// let reg = PaletteRegistry::new();
/// let id = reg.register("bw", &[rgb(0, 0, 0), rgb(255, 255, 255)], "")
///     .unwrap();
/// assert_eq!(reg.find_id("BW").unwrap(), id);
/// assert_eq!(reg.lut(Builtin::Gray.id()).unwrap().len(), 256);
/// ```
pub struct PaletteRegistry {
    config: RegistryConfig,
    inner: Mutex<Inner>,
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::new() }
}

impl PaletteRegistry {
    /// Registry with the default configuration.
    pub fn new() -> Self { Self::with_config(RegistryConfig::default()) }

    pub fn with_config(config: RegistryConfig) -> Self {
        PaletteRegistry {
            config,
            inner: Mutex::new(Inner {
                built: false,
                entries: BTreeMap::new(),
                next_user_id: PaletteId::FIRST_USER_PALETTE,
            }),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static PaletteRegistry { &GLOBAL }

    pub fn config(&self) -> &RegistryConfig { &self.config }

    /// Lock the registry, creating the built-in palettes if needed.
    /// The registry only ever grows, so a panic while it was locked
    /// cannot leave an entry half-inserted and poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if !inner.built {
            let size = self.config.get_lut_size();
            let steps = self.config.get_step_count();
            for e in default_entries(size, steps) {
                inner.entries.insert(e.id, e);
            }
            inner.built = true;
            debug!("built {} palettes ({} entries each)", inner.entries.len(), size);
        }
        inner
    }

    /// The LUT of palette `id`.
    pub fn lut(&self, id: PaletteId) -> PaletteResult<Arc<Lut>> {
        self.lock().entries.get(&id).map(|e| Arc::clone(&e.lut))
            .ok_or(PaletteError::NotFound(id))
    }

    /// The LUT of palette `id`, or transparent black if there is no
    /// such palette.
    pub fn lut_or_black(&self, id: PaletteId) -> Arc<Lut> {
        self.lut(id).unwrap_or_else(|_| self.black())
    }

    fn black(&self) -> Arc<Lut> {
        Arc::new(vec![RGBA8::default(); self.config.get_lut_size()])
    }

    /// The LUT designated by `r`.
    pub fn resolve(&self, r: &PaletteRef) -> PaletteResult<Arc<Lut>> {
        match r {
            PaletteRef::Builtin(b) => self.lut(b.id()),
            PaletteRef::User(id) => self.lut(*id),
            PaletteRef::Inline(lut) => Ok(Arc::clone(lut)),
        }
    }

    /// Same as [`PaletteRegistry::resolve`] with transparent black
    /// for unknown palettes.
    pub fn resolve_or_black(&self, r: &PaletteRef) -> Arc<Lut> {
        self.resolve(r).unwrap_or_else(|_| self.black())
    }

    /// Names and LUT of palette `id`.
    pub fn entry(&self, id: PaletteId) -> Option<PaletteEntry> {
        self.lock().entries.get(&id).cloned()
    }

    /// Store a copy of `lut` under a new id and return that id.  An
    /// empty `human_name` defaults to `name`.
    pub fn register(&self, name: &str, lut: &[RGBA8], human_name: &str)
                    -> PaletteResult<PaletteId> {
        let mut inner = self.lock();
        let id = inner.next_user_id;
        if id > PaletteId::LAST_USER_PALETTE {
            warn!("cannot register {:?}: registry full", name);
            return Err(PaletteError::RegistryFull(PaletteId::LAST_USER_PALETTE))
        }
        let human_name = if human_name.is_empty() { name } else { human_name };
        inner.entries.insert(id, PaletteEntry {
            id,
            name: name.to_string(),
            human_name: human_name.to_string(),
            aliases: vec![],
            lut: Arc::new(lut.to_vec()),
        });
        inner.next_user_id = PaletteId(id.0 + 1);
        debug!("registered palette {:?} as {} ({} entries)", name, id, lut.len());
        Ok(id)
    }

    /// Machine-readable name of palette `id`, or the id as a decimal
    /// string if there is no such palette.
    pub fn id_to_name(&self, id: PaletteId) -> String {
        self.lock().entries.get(&id).map_or_else(|| id.to_string(),
                                                  |e| e.name.clone())
    }

    /// Display name of palette `id`, or the id as a decimal string if
    /// there is no such palette.
    pub fn id_to_human_name(&self, id: PaletteId) -> String {
        self.lock().entries.get(&id).map_or_else(|| id.to_string(),
                                                  |e| e.human_name.clone())
    }

    /// Look up a palette by name, ignoring ASCII case: machine names
    /// first, then aliases, then display names.  A name that is an
    /// integer is taken as an id.
    pub fn find_id(&self, name: &str) -> PaletteResult<PaletteId> {
        let name = name.trim();
        let found = {
            let inner = self.lock();
            let entries = &inner.entries;
            let id = entries.values().find(|e| e.name.eq_ignore_ascii_case(name))
                .or_else(|| entries.values().find(|e| e.has_alias(name)))
                .or_else(|| entries.values().find(|e| {
                    e.human_name.eq_ignore_ascii_case(name) }))
                .map(|e| e.id);
            id
        };
        found.or_else(|| name.parse().ok())
            .ok_or_else(|| PaletteError::UnknownName(name.to_string()))
    }

    /// Same as [`PaletteRegistry::find_id`] but returns the configured
    /// fallback palette (Matlab by default) for unknown names.
    pub fn name_to_id(&self, name: &str) -> PaletteId {
        self.find_id(name).unwrap_or_else(|_| {
            let fallback = self.config.get_fallback();
            debug!("unknown palette {:?}, using {}", name, fallback.name());
            fallback.id()
        })
    }

    /// All palette ids, in increasing order.
    pub fn ids(&self) -> Vec<PaletteId> {
        self.lock().entries.keys().copied().collect()
    }

    /// Machine-readable names, in increasing id order.
    pub fn names(&self) -> Vec<String> {
        self.lock().entries.values().map(|e| e.name.clone()).collect()
    }

    /// Display names, in increasing id order.
    pub fn human_names(&self) -> Vec<String> {
        self.lock().entries.values().map(|e| e.human_name.clone()).collect()
    }

    /// Number of palettes, built-in ones included.
    pub fn len(&self) -> usize { self.lock().entries.len() }

    pub fn is_empty(&self) -> bool { self.lock().entries.is_empty() }

    /// Register `palettes`, stopping with an
    /// [`ImportIssue::RegistryFull`] issue when ids run out.
    fn register_parsed(&self, palettes: Vec<ParsedPalette>, interpolate: bool,
                       report: &mut ImportReport) {
        let size = self.config.get_lut_size();
        for p in palettes {
            let lut = p.to_lut(size, interpolate);
            match self.register(&p.name, &lut, "") {
                Ok(id) => report.ids.push(id),
                Err(_) => {
                    report.issues.push(ImportIssue::RegistryFull { palette: p.name });
                    return
                }
            }
        }
    }

    /// Register the palettes of `text`.  CSV text holds a single
    /// palette, registered as `name`; XML color maps are registered
    /// under their own names, unnamed ones as `"palette N"` where `N`
    /// is one more than the number of palettes already present.
    /// Nodes are interpolated linearly if `interpolate` is set, giving
    /// a staircase otherwise.
    ///
    /// Palettes that find no free id are reported as
    /// [`ImportIssue::RegistryFull`]; the ones registered before stay
    /// in the report.
    pub fn register_from_str(&self, text: &str, format: PaletteFormat,
                             name: &str, interpolate: bool)
                             -> PaletteResult<ImportReport> {
        let mut report = ImportReport::default();
        let palettes = match format {
            PaletteFormat::Csv => {
                let (p, issues) = parse_csv(text, name);
                report.issues = issues;
                p.into_iter().collect()
            }
            PaletteFormat::Xml => {
                let (p, issues) = parse_xml(text, self.len() + 1)?;
                report.issues = issues;
                p
            }
        };
        self.register_parsed(palettes, interpolate, &mut report);
        Ok(report)
    }

    /// Register the palettes of a file.  The format is given by the
    /// file extension (see [`PaletteFormat::from_path`]) and a CSV
    /// palette is named after the file.
    pub fn register_from_file(&self, path: impl AsRef<Path>, interpolate: bool)
                              -> PaletteResult<ImportReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |f| f.to_string_lossy().into_owned());
        let report = self.register_from_str(
            &text, PaletteFormat::from_path(path), &name, interpolate)?;
        info!("{}: {} palette(s) imported, {} issue(s)",
              path.display(), report.ids.len(), report.issues.len());
        Ok(report)
    }

    /// Register every `*.pal`, `*.rgb`, `*.csv` and `*.xml` file of
    /// `dir`, in file name order.  Files that cannot be read or parsed
    /// are reported as [`ImportIssue::UnreadableFile`].  The scan stops
    /// once the registry is full.
    pub fn register_from_dir(&self, dir: impl AsRef<Path>, interpolate: bool)
                             -> PaletteResult<ImportReport> {
        let mut files: Vec<_> = fs::read_dir(dir)?.filter_map(|e| match e {
            Ok(e) => Some(e.path()),
            Err(e) => {
                warn!("skipping directory entry: {}", e);
                None
            }
        }).filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str())
                  .is_some_and(|e| PALETTE_EXTENSIONS.iter()
                               .any(|x| x.eq_ignore_ascii_case(e))))
            .collect();
        files.sort();
        let mut report = ImportReport::default();
        for f in files {
            match self.register_from_file(&f, interpolate) {
                Ok(r) => {
                    report.append(r);
                    if report.is_full() { break }
                }
                Err(e) => {
                    warn!("{}: {}", f.display(), e);
                    report.issues.push(ImportIssue::UnreadableFile {
                        path: f.display().to_string(), message: e.to_string() });
                }
            }
        }
        Ok(report)
    }

    /// Run [`PaletteRegistry::register_from_dir`] on every configured
    /// search path that is a directory, until the registry is full.
    pub fn register_search_paths(&self, interpolate: bool) -> ImportReport {
        let mut report = ImportReport::default();
        for dir in self.config.get_search_paths() {
            if !dir.is_dir() {
                debug!("{}: not a directory, skipped", dir.display());
                continue
            }
            match self.register_from_dir(dir, interpolate) {
                Ok(r) => {
                    report.append(r);
                    if report.is_full() { break }
                }
                Err(e) => {
                    warn!("{}: {}", dir.display(), e);
                    report.issues.push(ImportIssue::UnreadableFile {
                        path: dir.display().to_string(), message: e.to_string() });
                }
            }
        }
        report
    }
}
