// demos/field_access.rs
//! Field and element access through raw region handles

use rawview::prelude::*;

#[repr(C)]
#[derive(Debug, Default)]
struct User {
    name: String,
    age: i64,
    animals: Vec<String>,
}

mod hidden {
    /// A record whose fields are not visible outside this module.
    #[repr(C)]
    #[derive(Debug)]
    pub struct Member {
        name: String,
        age: i64,
        animals: Vec<String>,
    }

    impl Member {
        pub fn roster_entry() -> Self {
            Self {
                name: String::from("admin"),
                age: 50,
                animals: vec![
                    String::from("roger"),
                    String::from("barry"),
                    String::from("melissa"),
                ],
            }
        }
    }
}

fn main() {
    println!("=== Field Handles ===\n");

    // 1. Start from a zero-value record
    let mut user = User::default();
    println!("{user:?}");

    // The first field lives at offset 0, so the record's own address is the
    // name field's address.
    let region = RawRegion::of_mut(&mut user);
    // SAFETY: offset 0 of a live User holds its initialized String field.
    unsafe {
        region.field::<String>(0).replace(String::from("bradford"));
    }
    println!("{user:?}");

    // 2. The second field needs an offset: base address plus the size of
    // everything before it, padded per the platform's layout rules.
    let region = RawRegion::of_mut(&mut user);
    // SAFETY: offset_of! locates the initialized i64 age field.
    unsafe {
        region
            .field::<i64>(std::mem::offset_of!(User, age))
            .write(34);
    }
    println!("{user:?}");

    // 3. Overwrite one element of the sequence field in place
    user.animals = vec![
        String::from("missy"),
        String::from("ellie"),
        String::from("toby"),
    ];
    println!("{user:?}");

    let animals = RawRegion::of_mut(&mut user.animals[..]);
    // SAFETY: index 1 is in bounds and holds an initialized String.
    let previous = unsafe {
        animals
            .element::<String>(1)
            .replace(String::from("carlos"))
    };
    println!("replaced {previous:?}");
    println!("{user:?}");

    println!("\n=== Element Handles ===\n");

    // Sequence elements sit contiguously, so each one lives at
    // base_address + index * size_of_element.
    let fruits = vec![
        String::from("apples"),
        String::from("oranges"),
        String::from("bananas"),
        String::from("kansas"),
    ];
    let region = RawRegion::of(&fruits[..]);
    for i in 0..fruits.len() {
        // SAFETY: i stays below fruits.len(); every slot is initialized.
        let fruit = unsafe { region.element::<String>(i).as_ref() };
        println!("{fruit}");
    }

    println!("\n=== Hidden Fields ===\n");

    // The same walk works on a record whose fields are private to another
    // module. No field names are usable here, so the offsets come from the
    // declared field order and the platform's layout rules instead.
    let mut member = hidden::Member::roster_entry();
    println!("{member:?}");

    let layout = RecordLayout::new(&[
        ("name", PrimitiveKind::Text),
        ("age", PrimitiveKind::I64),
        ("animals", PrimitiveKind::Seq),
    ]);

    let region = RawRegion::of_mut(&mut member);
    // SAFETY: Member is #[repr(C)] with exactly the declared field order,
    // so every computed offset lands on an initialized field.
    unsafe {
        region
            .field::<String>(layout.fields()[0].offset)
            .replace(String::from("bradford"));
    }
    println!("{member:?}");

    let region = RawRegion::of_mut(&mut member);
    // SAFETY: same layout contract as above.
    unsafe {
        region.field::<i64>(layout.fields()[1].offset).write(20);
    }
    println!("{member:?}");

    let region = RawRegion::of(&member);
    // SAFETY: same layout contract as above; reads only.
    let animals = unsafe {
        region
            .field::<Vec<String>>(layout.fields()[2].offset)
            .as_ref()
    };
    println!("{animals:?}");

    let items = RawRegion::of(&animals[..]);
    for i in 0..animals.len() {
        // SAFETY: i stays below animals.len(); every slot is initialized.
        let animal = unsafe { items.element::<String>(i).as_ref() };
        println!("{animal}");
    }
}
