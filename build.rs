use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use heck::ToKebabCase;
use phf_codegen::Map;

include!("src/models/mod.rs");

const ALL_CATEGORY_SLUG: &str = "all";
const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML_TEMPLATE: &str = include_str!("resources/resources.gresource.xml.in");

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    data_dir: PathBuf,
    catalog_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let data_dir = root.join("data");
        let output_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
        let catalog_file = output_dir.join("catalog.rs");
        let resources_xml_file = output_dir.join("resources.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Ok(Self {
            data_dir,
            catalog_file,
            resources_xml_file,
            compiled_resources_file,
        })
    }
}

// ===== APPLICATION METADATA =====

struct ApplicationMetadata {
    name: &'static str,
    id: std::string::String,
    prefix: std::string::String,
    title: std::string::String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let manifest: toml::Value = toml::from_str(MANIFEST_TOML)
            .context("Failed to parse Cargo.toml")?;

        let package = manifest.get("package")
            .context("Missing [package] section in Cargo.toml")?;

        let metadata = package.get("metadata")
            .context("Missing [package.metadata] section in Cargo.toml")?;

        Ok(Self {
            name: env!("CARGO_PKG_NAME"),
            id: Self::extract_string(metadata, "id")?,
            prefix: Self::extract_string(metadata, "prefix")?,
            title: Self::extract_string(metadata, "title")?,
        })
    }

    fn extract_string(metadata: &toml::Value, key: &str) -> Result<std::string::String> {
        metadata.get(key)
            .and_then(toml::Value::as_str)
            .map(std::string::String::from)
            .with_context(|| format!("Missing [package.metadata] key `{key}`"))
    }
}

// ===== CATALOG DATA =====

struct CatalogData {
    categories: Vec<Category>,
    destinations: Vec<Listing>,
    groups: Vec<Group>,
}

impl CatalogData {
    fn load(data_dir: &Path) -> Result<Self> {
        let mut categories: Vec<Category> = Self::read_json(&data_dir.join("categories.json"))?;
        for category in &mut categories {
            category.slug = category.name.to_kebab_case();
        }

        Ok(Self {
            categories,
            destinations: Self::read_json(&data_dir.join("destinations.json"))?,
            groups: Self::read_json(&data_dir.join("groups.json"))?,
        })
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        let mut slugs = HashSet::new();
        for category in &self.categories {
            if !slugs.insert(category.slug.as_str()) {
                bail!("Duplicate category slug `{}`", category.slug);
            }
        }
        if !slugs.contains(ALL_CATEGORY_SLUG) {
            bail!("Category set is missing the `{ALL_CATEGORY_SLUG}` sentinel");
        }

        Self::ensure_unique_ids("destination", self.destinations.iter().map(|listing| listing.id.as_str()))?;
        Self::ensure_unique_ids("group", self.groups.iter().map(|group| group.id.as_str()))?;

        for listing in &self.destinations {
            if
                let Some(category) = &listing.category
                && self.category_index(category).is_none()
            {
                bail!("Destination `{}` references unknown category `{category}`", listing.id);
            }
        }

        Ok(())
    }

    fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.name == name)
    }

    fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                bail!("Duplicate {kind} id `{id}`");
            }
        }
        Ok(())
    }
}

// ===== CATALOG CODEGEN =====

struct CatalogCodegen<'a> {
    data: &'a CatalogData,
}

impl CatalogCodegen<'_> {
    fn generate(&self) -> std::string::String {
        let destination_ids = self.data.destinations.iter().map(|listing| listing.id.as_str());
        let group_ids = self.data.groups.iter().map(|group| group.id.as_str());

        format!(
            "Catalog {{\n    \
                categories: {},\n    \
                destinations: {},\n    \
                groups: {},\n    \
                destinations_map: {},\n    \
                groups_map: {},\n\
            }}",
            self.format_categories(),
            self.format_destinations(),
            self.format_groups(),
            Self::format_phf_index_map(destination_ids),
            Self::format_phf_index_map(group_ids),
        )
    }

    fn format_categories(&self) -> std::string::String {
        let mut code = std::string::String::from("&[\n");
        for category in &self.data.categories {
            code.push_str(&format!(
                "        Category {{ slug: {:?}, name: {:?}, icon: {:?} }},\n",
                category.slug, category.name, category.icon,
            ));
        }
        code.push_str("    ]");
        code
    }

    fn format_destinations(&self) -> std::string::String {
        let mut code = std::string::String::from("&[\n");
        for listing in &self.data.destinations {
            let category = listing.category.as_deref()
                .and_then(|name| self.data.category_index(name))
                .map_or_else(
                    || std::string::String::from("None"),
                    |index| format!("Some({index}usize)"),
                );

            code.push_str(&format!(
                "        Listing {{ id: {:?}, name: {:?}, image: {:?}, location: {:?}, \
                 price: {:?}, duration: {}u32, description: {:?}, category: {} }},\n",
                listing.id, listing.name, listing.image, listing.location,
                listing.price, listing.duration, listing.description, category,
            ));
        }
        code.push_str("    ]");
        code
    }

    fn format_groups(&self) -> std::string::String {
        let mut code = std::string::String::from("&[\n");
        for group in &self.data.groups {
            code.push_str(&format!(
                "        Group {{ id: {:?}, name: {:?}, image: {:?}, location: {:?}, price: {:?} }},\n",
                group.id, group.name, group.image, group.location, group.price,
            ));
        }
        code.push_str("    ]");
        code
    }

    fn format_phf_index_map<'a>(ids: impl Iterator<Item = &'a str>) -> std::string::String {
        let mut phf_builder = Map::new();
        for (index, id) in ids.enumerate() {
            phf_builder.entry(id, index.to_string());
        }
        phf_builder.build().to_string()
    }
}

// ===== RESOURCES =====

struct ResourceCompiler<'a> {
    configuration: &'a BuildConfiguration,
    prefix: &'a str,
}

impl ResourceCompiler<'_> {
    fn compile(&self) -> Result<()> {
        let xml = RESOURCES_XML_TEMPLATE.replace("@prefix@", self.prefix);
        std::fs::write(&self.configuration.resources_xml_file, xml)
            .context("Failed to write resources manifest")?;

        let manifest_path = self.configuration.resources_xml_file.to_str()
            .context("Non UTF-8 output directory")?;
        glib_build_tools::compile_resources(&["resources"], manifest_path, RESOURCES_FILE_NAME);
        Ok(())
    }
}

// ===== BUILD DIRECTIVES =====

fn emit_build_directives(metadata: &ApplicationMetadata, configuration: &BuildConfiguration) {
    println!("cargo:rustc-cfg=runtime");
    println!("cargo:rustc-check-cfg=cfg(runtime)");
    println!("cargo:rustc-env=APP_NAME={}", metadata.name);
    println!("cargo:rustc-env=APP_ID={}", metadata.id);
    println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
    println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
    println!("cargo:rustc-env=APP_RESOURCES={}", configuration.compiled_resources_file.display());
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
    println!("cargo:rerun-if-changed=resources");
    println!("cargo:rerun-if-changed=src/models");
}

fn main() -> Result<()> {
    let configuration = BuildConfiguration::new()?;
    let metadata = ApplicationMetadata::extract_from_cargo()?;

    let data = CatalogData::load(&configuration.data_dir)?;
    data.validate()?;

    let catalog = CatalogCodegen { data: &data }.generate();
    std::fs::write(&configuration.catalog_file, catalog)
        .context("Failed to write generated catalog")?;

    ResourceCompiler {
        configuration: &configuration,
        prefix: &metadata.prefix,
    }
    .compile()?;

    emit_build_directives(&metadata, &configuration);
    Ok(())
}
