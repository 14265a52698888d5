//! Hand-written descriptions for classic and popular titles.
//!
//! The manual table is the first link in the chain: exact title match only,
//! no fuzzy or case-insensitive lookup, no network. It also carries the
//! curated per-id table the retouch pass uses to replace previously generated
//! catch-all text.

use crate::model::BookRecord;
use crate::resolve::DescriptionSource;

/// Pre-vetted descriptions keyed by exact title.
static MANUAL_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Amelia Bedelia",
        "Amelia Bedelia takes everything literally! When the Rogers family asks her to 'draw the drapes' or 'dress the chicken,' hilarious mix-ups happen. A beloved classic about a well-meaning housekeeper who always gets things wonderfully wrong.",
    ),
    (
        "Nate the Great",
        "Nate the Great is a boy detective who solves neighborhood mysteries with logic, determination, and a little help from his dog Sludge. Pancakes optional but highly recommended!",
    ),
    (
        "Henry and Mudge",
        "Henry loves his big dog Mudge, and Mudge loves Henry. Together they have wonderful adventures and face everyday challenges with friendship, humor, and lots of slobbery kisses.",
    ),
    (
        "Goodnight Moon",
        "In a great green room, a little bunny says goodnight to everything around him. This gentle bedtime story has helped millions of children drift off to sleep for over 70 years.",
    ),
    (
        "Click, Clack, Moo: Cows That Type",
        "Farmer Brown's cows discover a typewriter and start making demands! When they go on strike for electric blankets, it leads to hilarious barnyard negotiations.",
    ),
    (
        "If You Give a Mouse a Cookie",
        "If you give a mouse a cookie, he's going to ask for a glass of milk. And then... one thing leads to another in this circular tale of cause and effect that kids love to predict!",
    ),
    (
        "Corduroy",
        "A small teddy bear in a department store wants nothing more than a home and a friend. When Lisa discovers him, it's the beginning of a beautiful friendship.",
    ),
    (
        "Harold and the Purple Crayon",
        "Armed with his purple crayon, Harold draws himself into wonderful adventures, creating entire worlds with his imagination. Where will his purple line take him tonight?",
    ),
    (
        "Madeline",
        "In an old house in Paris covered with vines, lived twelve little girls in two straight lines. The smallest one was Madeline! A brave little girl with a spirit that can't be tamed.",
    ),
    (
        "The Snowy Day",
        "Peter wakes up to discover fresh snow! He explores his neighborhood, making snow angels and saving a snowball in his pocket. A timeless story celebrating wonder and discovery.",
    ),
    (
        "The Gruffalo",
        "A clever mouse invents a scary monster called the Gruffalo to scare off predators in the deep dark wood. But what happens when the Gruffalo turns out to be real?",
    ),
    (
        "Go, Dog. Go!",
        "Dogs of all kinds doing all sorts of things! Going up, down, in, out, and all around. A simple, fun book perfect for beginning readers.",
    ),
    (
        "Are You My Mother?",
        "A baby bird falls from his nest and searches everywhere for his mother. Is she a kitten? A hen? A dog? A snort? Kids love this funny tale of a determined little bird.",
    ),
    (
        "Charlotte's Web",
        "Wilbur the pig and Charlotte the spider form an unlikely friendship. When Wilbur's life is in danger, Charlotte weaves words in her web to save him in this timeless tale of friendship and sacrifice.",
    ),
    (
        "Winnie-the-Pooh",
        "Join Pooh Bear and his friends Piglet, Eeyore, Tigger, and Christopher Robin for gentle adventures in the Hundred Acre Wood. Honey optional!",
    ),
    (
        "Stuart Little",
        "Stuart Little is a mouse born to a human family in New York City. Despite his small size, he has big adventures and an even bigger heart.",
    ),
    (
        "Mr. Popper's Penguins",
        "When house painter Mr. Popper receives a penguin from Antarctica, it's just the beginning! Soon his family home is filled with a dozen performing penguins.",
    ),
    (
        "Curious George",
        "George is a good little monkey, but he's always curious! His curiosity leads to mischief and adventure, but his friend the Man with the Yellow Hat is always there to help.",
    ),
    (
        "The Giving Tree",
        "A young boy and a tree form a special bond that lasts a lifetime. As the boy grows, the tree gives generously in this moving tale about love and giving.",
    ),
    (
        "The Little Engine That Could",
        "A little blue engine agrees to pull a heavy train over a steep mountain when bigger engines refuse. 'I think I can, I think I can' becomes a mantra of determination!",
    ),
    (
        "Chicka Chicka Boom Boom",
        "A told B, and B told C, 'I'll meet you at the top of the coconut tree!' A rhythmic alphabet adventure where all the letters race to the top.",
    ),
    (
        "The Polar Express",
        "On Christmas Eve, a magical train takes a boy to the North Pole to meet Santa. A journey about believing in the magic of Christmas.",
    ),
    (
        "Where the Wild Things Are",
        "When Max gets sent to bed without supper, he sails away to where the wild things are and becomes king of all wild things! But he soon misses home.",
    ),
    (
        "Green Eggs and Ham",
        "Would you eat green eggs and ham? Sam-I-Am persistently offers this unusual meal in every situation imaginable. A Dr. Seuss classic about trying new things!",
    ),
    (
        "Brown Bear, Brown Bear, What Do You See?",
        "Children will delight in identifying the colors and animals in this beloved pattern book with Bill Martin Jr.'s rhythmic text and Eric Carle's vibrant collage illustrations.",
    ),
    (
        "Press Here",
        "Press the yellow dot and turn the page... What happens next? A magical book that invites kids to interact with dots, colors, and movements in surprising ways.",
    ),
    (
        "The Kissing Hand",
        "Chester Raccoon doesn't want to go to kindergarten. His mother shares a family secret called the Kissing Hand to comfort him. Perfect for first-day-of-school jitters!",
    ),
    (
        "Because of Winn-Dixie",
        "Ten-year-old Opal adopts a stray dog and names him after the grocery store where she found him. Winn-Dixie helps her make friends in her new town.",
    ),
    (
        "Rainbow Fish",
        "Rainbow Fish has beautiful, shimmering scales but no friends. He learns that sharing his most prized possessions can bring the greatest happiness.",
    ),
    (
        "The Tale of Peter Rabbit",
        "Peter disobeys his mother and sneaks into Mr. McGregor's garden. A narrow escape and a tummy ache teach him a lesson in this classic tale.",
    ),
    (
        "Make Way for Ducklings",
        "Mr. and Mrs. Mallard search for the perfect place to raise their ducklings in Boston. They find it on an island in the Public Garden.",
    ),
    (
        "Flat Stanley",
        "After a bulletin board falls on Stanley Lambchop, he's only half an inch thick! Being flat has advantages though - like being mailed to California for vacation!",
    ),
    (
        "The Hundred Dresses",
        "Wanda claims she has one hundred dresses at home, but she wears the same faded dress to school every day. A powerful story about bullying and standing up for others.",
    ),
];

/// Curated replacements keyed by record id, used by the retouch pass to
/// upgrade records that previously received the generic catch-all text.
static CURATED_BY_ID: &[(&str, &str)] = &[
    (
        "56",
        "Pinkalicious loves the color pink so much that she eats too many pink cupcakes and turns pink herself! A delightful story about moderation with magical pink illustrations.",
    ),
    (
        "58",
        "Chrysanthemum loves her name—until she starts school and the other students make fun of it. A touching story about self-acceptance and the power of a kind teacher.",
    ),
    (
        "59",
        "A little chameleon is sad that he doesn't have his own color like goldfish, elephants, and parrots do. But being able to change colors turns out to be a special gift all its own!",
    ),
    (
        "61",
        "Splat the Cat is nervous about his first day of school! Will he make friends? Will he like his teacher? Join Splat on his hilarious school adventure filled with mishaps and surprises.",
    ),
    (
        "80",
        "Titch is the smallest in his family. His brother and sister have bigger things than him—until Titch plants a tiny seed that grows bigger than anything! A story about finding your own strengths.",
    ),
    (
        "94",
        "Angelina dreams of becoming a ballerina and practices her pirouettes everywhere she goes! When her parents enroll her in ballet school, her dream begins to come true.",
    ),
    (
        "104",
        "The Bad Seed has a bad attitude, bad manners, and a bad temper. But was he always bad? A surprisingly touching story about how it's never too late to change your ways.",
    ),
    (
        "113",
        "Fry bread is food. Fry bread is time, place, and nation. This lyrical celebration explores the history and meaning of fry bread to Indigenous communities across America.",
    ),
    (
        "121",
        "Sam Graves discovers his new elementary school is ALIVE and up to no good! The floors shake, the walls groan, and strange things happen. Can Sam survive Eerie Elementary?",
    ),
    (
        "123",
        "Yasmin is a spirited second-grader who's always on the lookout for new things to try! In this story, she explores her creative side and discovers her own unique fashion sense.",
    ),
    (
        "125",
        "A boy and his grandfather don't speak the same language, but they communicate through art. A wordless connection blooms as they draw together, bridging cultures and generations.",
    ),
    (
        "139",
        "This powerful poem is a love letter to Black life in America, celebrating the strength, resilience, and beauty of Black heroes past and present. Originally performed at the Oscars.",
    ),
    (
        "144",
        "A young Black girl explores the many emotions she holds inside—joy, anger, fear, and pride. This poetic journey validates all feelings and the space they deserve.",
    ),
    (
        "149",
        "Barnabus is a half-mouse, half-elephant creature who dreams of freedom. When he discovers his fate as a 'Failed Project,' he must escape and find where he truly belongs.",
    ),
    (
        "168",
        "When a crocodile accidentally swallows a watermelon seed, he's convinced a watermelon will grow in his belly! His friends try to reassure him in this silly story about worrying.",
    ),
    (
        "170",
        "Gerald the Elephant has an ice cream cone, but should he share it with Piggie? Mo Willems explores friendship and sharing with humor and heart in this easy reader.",
    ),
    (
        "171",
        "The fascinating story of Erno Rubik, the Hungarian inventor who created the world's most popular puzzle. Learn how curiosity and persistence led to the Rubik's Cube!",
    ),
    (
        "172",
        "A skeptical narrator tries to find reasons to love math, with hilarious commentary and colorful illustrations. Even math-phobes will giggle their way through this book!",
    ),
    (
        "175",
        "Libby loves asking questions and doing experiments! Join her as she explores solids, liquids, and gases through fun, hands-on science discoveries.",
    ),
    (
        "177",
        "Beak the bird and Ally the alligator seem like an unlikely pair, but sometimes the best friendships come from the most unexpected places. A sweet story about accepting differences.",
    ),
    (
        "179",
        "Gigi wonders about her Japanese name and what it means. When her Ojiji (grandfather) visits from Japan, they explore the special meanings and stories behind both their names.",
    ),
    (
        "180",
        "Bear and Bird are best friends who share three gentle adventures—stargazing, nest-building, and more. Perfect for bedtime with soft illustrations and tender moments.",
    ),
    (
        "186",
        "What if you woke up with an animal tail? Would you want a monkey's balancing tail, a lizard's snap-off tail, or a beaver's flat swimming tail? Explore amazing animal adaptations!",
    ),
    (
        "187",
        "When a new princess arrives at the castle, the royal family must adjust to having a baby around. A funny, modern take on welcoming a new sibling.",
    ),
    (
        "188",
        "Reina Ramos faces a problem: her abuelo is coming to visit, but she wants to play with her friends! Can she find a way to make everyone happy?",
    ),
    (
        "190",
        "Can you spot the truth from the lies about dogs? This interactive book presents wild facts—some true, some false. Test your knowledge and learn surprising dog facts!",
    ),
    (
        "193",
        "Hornbeam the tree has stood in the same spot for years, watching the world change around him. When he finally decides to join in, wonderful things happen!",
    ),
    (
        "194",
        "Mittens is a kitten who sees everything as an adventure! Whether it's a cardboard box or a paper bag, Mittens finds joy in simple things.",
    ),
    (
        "197",
        "Amanda has an alligator. Not a toy alligator, but a REAL alligator! Mo Willems brings his signature humor to this absurd and delightful friendship.",
    ),
];

/// Exact-title lookup into the manual table.
pub fn manual_description(title: &str) -> Option<&'static str> {
    MANUAL_DESCRIPTIONS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, d)| *d)
}

/// Curated per-id lookup for the retouch pass.
pub fn curated_description(id: &str) -> Option<&'static str> {
    CURATED_BY_ID.iter().find(|(i, _)| *i == id).map(|(_, d)| *d)
}

/// First link in the description chain: the manual table.
pub struct ManualSource;

impl DescriptionSource for ManualSource {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn candidate(&self, book: &BookRecord) -> Option<String> {
        manual_description(&book.title).map(String::from)
    }
}
